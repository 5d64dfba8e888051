//! MarsNext Example - landing page and user dashboard
//!
//! Composes a full page from spark-compose components:
//! - Hero with logo, tagline and a "Launch App" link
//! - "Build with the power of BLOCKCHAIN" with feature tiles
//! - "Supported by the BEST" chain badges and supported currencies
//! - The user dashboard: navigation side panel plus main panel
//!
//! Keys: `m` toggles light/dark, `q` quits. Resize the terminal to watch
//! responsive values and the side panel follow the width.
//!
//! Run with: cargo run --example marsnext [-- --dashboard] [--inline] [--config path]
//!
//! Logs go to `marsnext.log` (`RUST_LOG=trace` shows the nav shell state per pass).

use std::rc::Rc;

use spark_compose::prelude::*;
use spark_compose::{ComposeConfig, Environment, RenderMode};

// =============================================================================
// Landing page
// =============================================================================

fn hero() -> ContainerBlock {
    let button = ContainerBlock::hstack()
        .justify(JustifyContent::Center)
        .width([25, 30, 40])
        .padding_y(1)
        .border_width(1)
        .border_bottom_width(5)
        .border_radius(20)
        .border_color("orange.600")
        .background("orange.500")
        .child(Text::new("Launch App ›").color("white").bold());

    ContainerBlock::vstack()
        .width(Length::FULL)
        .spacing(1)
        .padding_y(2)
        .child(
            ContainerBlock::vstack()
                .width([30, 50, 70])
                .child(Asset::new("marsnext-logo", "▲ M A R S N E X T").color("orange.500"))
                .child(
                    Text::new("A community centric decentralized reward distribution system.")
                        .size([TextSize::Xxl, TextSize::Xxxl, TextSize::Xxxxl])
                        .align(TextAlign::Center),
                ),
        )
        .child(NavLink::new("/registration", button))
}

fn power_of_blockchain() -> ContainerBlock {
    let tile = |key: &str, glyph: &str, caption: &str| {
        Badge::new(Asset::new(key, glyph).size(5, 2)).caption(caption)
    };

    ContainerBlock::vstack()
        .width(Length::FULL)
        .padding_y([2, 4])
        .spacing([1, 2])
        .fill(Fill::gradient(
            GradientDirection::ToBottom,
            ("white", "blackAlpha.900"),
            "transparent",
        ))
        .child(HeadingBlock::new("Build with the power of", "BLOCKCHAIN"))
        .child(Asset::new("cubes", "⬢ ⬢ ⬢").color("orange.500"))
        .child(
            ContainerBlock::vstack().width([30, 50, 60]).child(
                Text::new(
                    "Every logic & reward distribution written on secure smart contracts. \
                     All smart contracts are verified on block explorers & open source.",
                )
                .align(TextAlign::Center)
                .bold(),
            ),
        )
        // No "Renounced" tile yet.
        .child(
            BadgeRow::new([
                tile("transparent", "◇", "Transparent"),
                tile("secured", "⛨", "Secured"),
                tile("open-source", "▣", "Open Source"),
            ])
            .badge_min_width(18)
            .caption_color("orange.500"),
        )
}

fn supported_chains() -> ContainerBlock {
    ContainerBlock::vstack()
        .width(Length::FULL)
        .padding_y([2, 3, 4])
        .spacing(1)
        .fill(Fill::gradient(
            GradientDirection::ToTop,
            ("white", "blackAlpha.900"),
            "transparent",
        ))
        .child(HeadingBlock::new("Supported by the", "BEST"))
        .child(BadgeRow::new([
            Asset::new("bsc", "◆ BSC").color("yellow.400"),
            Asset::new("polygon", "⬡ Polygon").color(("gray.700", "gray.300")),
            Asset::new("ethereum", "♦ Ethereum").color(("gray.700", "gray.300")),
        ]))
        .child(HeadingBlock::new("Supported", "CURRENCIES"))
        .child(BadgeRow::new([
            Asset::new("usdt", "₮ USDT").color("gray.500"),
            Asset::new("busd", "◈ BUSD").color("yellow.500"),
        ]))
}

fn landing_page() -> ContainerBlock {
    ContainerBlock::vstack()
        .width(Length::FULL)
        .child(hero())
        .child(power_of_blockchain())
        .child(supported_chains())
}

// =============================================================================
// Dashboard
// =============================================================================

fn dashboard(address: &str) -> spark_compose::Result<NavShell> {
    let nav = ContainerBlock::vstack()
        .align(AlignItems::FlexStart)
        .spacing(1)
        .children(["Dashboard", "Team", "Income", "Profile"].map(|item| {
            NavLink::new(
                format!("/user/{address}/{}", item.to_lowercase()),
                Text::new(item).bold(),
            )
        }));

    let main = ContainerBlock::vstack()
        .spacing(1)
        .child(HeadingBlock::new("Welcome", "BACK").size([TextSize::Lg, TextSize::Xl]))
        .child(Text::new(format!("Connected as {address}")).color(("gray.600", "gray.400")));

    NavShell::builder()
        .side_panel(nav)
        .main_panel(main)
        .threshold(Tier::Medium)
        .build()
}

// =============================================================================
// Main
// =============================================================================

fn main() -> spark_compose::Result<()> {
    // Logs go to a file; the terminal belongs to the UI.
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("marsnext.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match args.iter().position(|a| a == "--config") {
        Some(i) => args
            .get(i + 1)
            .map(ComposeConfig::load_or_default)
            .unwrap_or_default(),
        None => ComposeConfig::default(),
    };

    let env = Environment::from_config(&config)?;
    if args.iter().any(|a| a == "--inline") {
        env.set_render_mode(RenderMode::Inline);
    }

    let page: Rc<dyn Renderable> = if args.iter().any(|a| a == "--dashboard") {
        Rc::new(dashboard("0x5B38Da6a701c568545dCfcB03FcB875f56beddC4")?)
    } else {
        Rc::new(landing_page())
    };

    let handle = spark_compose::mount(&env, page)?;
    spark_compose::run(&handle, &env)?;
    handle.unmount();
    Ok(())
}
