//! End-to-end composition scenarios: resolution, components, layout and the
//! reactive pipeline together.

use std::cell::Cell;
use std::rc::Rc;

use spark_compose::components::badge_key;
use spark_compose::pipeline::{create_element_derived, create_frame_derived};
use spark_compose::prelude::*;
use spark_compose::responsive::{resolve_tiered, TIER_COUNT};
use spark_compose::element::Edges;
use spark_compose::types::{BorderStyle, Dimension, Rgba};
use spark_compose::{compute_layout, paint, ComposeError, Environment};

fn ctx(tier: Tier, mode: ColorMode) -> RenderContext {
    RenderContext::fixed(tier, mode)
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn test_breakpoint_value_scenarios() {
    let value = BreakpointValue::from_array([2, 5, 10]);
    assert_eq!(*value.resolve(Tier::Medium), 5);
    assert_eq!(*value.resolve(Tier::Small), 2);
    assert_eq!(*value.resolve(Tier::from_index(5)), 10);
}

#[test]
fn test_resolution_is_closest_defined_lower_entry() {
    let slots = [None, Some(3), None, Some(7), None, None];
    let expected = [3, 3, 3, 7, 7, 7, 7, 7];
    for (index, want) in expected.iter().enumerate() {
        assert_eq!(resolve_tiered(&slots, index), Some(want), "index {index}");
    }
    assert_eq!(resolve_tiered::<i32>(&[], 0), None);
}

#[test]
fn test_runtime_breakpoint_value_is_validated() {
    assert!(matches!(
        BreakpointValue::<i32>::try_from_vec(vec![]),
        Err(ComposeError::EmptyBreakpointValue)
    ));
    assert!(matches!(
        BreakpointValue::try_from_vec(vec![1; TIER_COUNT + 1]),
        Err(ComposeError::TooManyTierValues { .. })
    ));
}

#[test]
fn test_mode_value_round_trip() {
    let value = ModeValue::new("light", "dark");
    let mode = ColorMode::Light;
    assert_eq!(*value.resolve(mode), "light");
    assert_eq!(*value.resolve(mode.toggle()), "dark");
    assert_eq!(*value.resolve(mode.toggle().toggle()), "light");
}

// =============================================================================
// Components
// =============================================================================

#[test]
fn test_badge_row_preserves_order() {
    let row = BadgeRow::new([
        Asset::new("a", "A"),
        Asset::new("b", "B"),
        Asset::new("c", "C"),
    ]);
    let element = row.render(&ctx(Tier::Large, ColorMode::Dark));
    let names: Vec<_> = element
        .children
        .iter()
        .map(|badge| badge.children[0].key.clone().unwrap_or_default())
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn test_badge_row_empty_input() {
    let row = BadgeRow::new(Vec::<Badge>::new());
    let element = row.render(&ctx(Tier::Small, ColorMode::Light));
    assert_eq!(element.count(|e| e.key.as_deref() == Some(badge_key(0).as_str())), 0);
    assert!(element.children.is_empty());
}

#[test]
fn test_nav_shell_small_tier_renders_main_only() {
    let shell = NavShell::builder()
        .side_panel(Text::new("X").key("x"))
        .main_panel(Text::new("Y").key("y"))
        .threshold(Tier::Medium)
        .build()
        .unwrap();

    let small = shell.render(&ctx(Tier::Small, ColorMode::Dark));
    assert!(!small.contains_key("x"));
    assert!(small.contains_key("y"));

    let medium = shell.render(&ctx(Tier::Medium, ColorMode::Dark));
    assert!(medium.contains_key("x"));
    assert!(medium.contains_key("y"));
}

#[test]
fn test_nav_shell_requires_main_panel() {
    let err = NavShell::builder().build().err().unwrap();
    assert_eq!(err.to_string(), "NavShell requires a main panel");
}

#[test]
fn test_container_clamps_negative_inputs() {
    let element = ContainerBlock::hstack()
        .spacing(-5)
        .padding([-1, 3])
        .width(-10)
        .height(Length::Percent(250.0))
        .border_width(-1)
        .render(&ctx(Tier::Small, ColorMode::Dark));

    assert_eq!(element.style.gap, 0);
    assert_eq!(element.style.padding, Edges::ZERO);
    assert_eq!(element.style.width, Dimension::Cells(0));
    assert_eq!(element.style.height, Dimension::Percent(100.0));
    assert_eq!(element.style.border, BorderStyle::None);
}

// =============================================================================
// Pipeline
// =============================================================================

fn landing() -> ContainerBlock {
    ContainerBlock::vstack()
        .width(Length::FULL)
        .spacing(1)
        .background(("white", "black"))
        .child(HeadingBlock::new("Supported by the", "BEST").size(TextSize::Lg))
        .child(
            BadgeRow::new([Asset::new("bsc", "◆ BSC"), Asset::new("eth", "♦ ETH")])
                .spacing(1)
                .padding(0),
        )
        .child(NavLink::new("/registration", Text::new("Launch App")))
}

#[test]
fn test_full_page_layout_and_paint() {
    let element = landing().render(&ctx(Tier::Large, ColorMode::Dark));
    let layout = compute_layout(&element, 100, 20, true).unwrap();
    let frame = paint(&element, &layout, 100, 20);

    let text = frame.buffer.to_text();
    assert!(text.contains("Supported by the BEST"));
    assert!(text.contains("◆ BSC"));
    assert!(text.contains("╭"));
    assert!(text.contains("━"));

    assert_eq!(frame.link_regions.len(), 1);
    let region = &frame.link_regions[0];
    assert_eq!(region.target, "/registration");
    assert_eq!(region.rect.width, 10);
    assert_eq!(frame.buffer.get(0, 0).map(|c| c.bg), Some(Rgba::BLACK));
}

#[test]
fn test_mode_toggle_repaints_everywhere() {
    let env = Environment::new(100, 20);
    let frame = create_frame_derived(&env, create_element_derived(&env, Rc::new(landing())));

    assert_eq!(frame.get().buffer.get(0, 0).map(|c| c.bg), Some(Rgba::BLACK));
    env.toggle_mode();
    assert_eq!(frame.get().buffer.get(0, 0).map(|c| c.bg), Some(Rgba::WHITE));
    env.toggle_mode();
    assert_eq!(frame.get().buffer.get(0, 0).map(|c| c.bg), Some(Rgba::BLACK));
}

#[test]
fn test_resize_crosses_nav_shell_threshold() {
    let env = Environment::new(40, 20);
    let shell = NavShell::builder()
        .side_panel(Text::new("nav").key("nav"))
        .main_panel(Text::new("content"))
        .build()
        .unwrap();
    let element = create_element_derived(&env, Rc::new(shell));

    assert!(!element.get().contains_key("nav"));
    env.set_viewport(120, 20);
    assert!(element.get().contains_key("nav"));
    env.set_viewport(59, 20);
    assert!(!element.get().contains_key("nav"));
}

#[test]
fn test_static_page_ignores_mode_toggle() {
    let env = Environment::new(80, 24);
    let passes = Rc::new(Cell::new(0));
    let counter = passes.clone();
    let page = Rc::new(spark_compose::from_fn(move |ctx: &RenderContext| {
        counter.set(counter.get() + 1);
        ContainerBlock::vstack()
            .padding([1, 2])
            .child(Text::new("static"))
            .render(ctx)
    }));
    let element = create_element_derived(&env, page);

    element.get();
    env.toggle_mode();
    element.get();
    assert_eq!(passes.get(), 1);
}
