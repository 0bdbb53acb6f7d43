use glam::{vec2, Vec2};
use lib_session::Aabb;

#[derive(Debug, Clone, Copy)]
struct ContainsTest {
    name: &'static str,
    rect: Aabb,
    point: Vec2,
    expected: bool,
}

fn run_tests(tests: impl IntoIterator<Item = ContainsTest>) {
    for case in tests.into_iter() {
        println!("Running {:?}", case.name);
        assert_eq!(
            case.rect.contains(case.point),
            case.expected,
            "Test {:?} failed",
            case.name,
        );
    }
}

fn target_box() -> Aabb {
    Aabb::from_pos_size(vec2(500.0, 300.0), Vec2::splat(64.0))
}

#[test]
fn basic_contains() {
    run_tests([
        ContainsTest {
            name: "interior",
            rect: target_box(),
            point: vec2(520.0, 310.0),
            expected: true,
        },
        ContainsTest {
            name: "center",
            rect: target_box(),
            point: vec2(532.0, 332.0),
            expected: true,
        },
        ContainsTest {
            name: "far outside",
            rect: target_box(),
            point: vec2(0.0, 0.0),
            expected: false,
        },
        ContainsTest {
            name: "outside left",
            rect: target_box(),
            point: vec2(499.0, 310.0),
            expected: false,
        },
        ContainsTest {
            name: "outside right",
            rect: target_box(),
            point: vec2(565.0, 310.0),
            expected: false,
        },
        ContainsTest {
            name: "outside above",
            rect: target_box(),
            point: vec2(520.0, 299.0),
            expected: false,
        },
        ContainsTest {
            name: "outside below",
            rect: target_box(),
            point: vec2(520.0, 365.0),
            expected: false,
        },
    ]);
}

#[test]
fn edges_are_inclusive() {
    run_tests([
        ContainsTest {
            name: "left edge",
            rect: target_box(),
            point: vec2(500.0, 310.0),
            expected: true,
        },
        ContainsTest {
            name: "right edge",
            rect: target_box(),
            point: vec2(564.0, 310.0),
            expected: true,
        },
        ContainsTest {
            name: "top edge",
            rect: target_box(),
            point: vec2(520.0, 300.0),
            expected: true,
        },
        ContainsTest {
            name: "bottom edge",
            rect: target_box(),
            point: vec2(520.0, 364.0),
            expected: true,
        },
        ContainsTest {
            name: "top-left corner",
            rect: target_box(),
            point: vec2(500.0, 300.0),
            expected: true,
        },
        ContainsTest {
            name: "bottom-right corner",
            rect: target_box(),
            point: vec2(564.0, 364.0),
            expected: true,
        },
        ContainsTest {
            name: "just past the corner",
            rect: target_box(),
            point: vec2(564.5, 364.5),
            expected: false,
        },
    ]);
}

#[test]
fn derived_box_matches_pos_and_size() {
    let rect = target_box();

    assert_eq!(rect.min, vec2(500.0, 300.0));
    assert_eq!(rect.max, vec2(564.0, 364.0));
    assert_eq!(rect.size(), Vec2::splat(64.0));
}
