use std::cell::Cell;
use std::rc::Rc;

use hot_spot::{
    Alternate, AlternateComponentFactory, AttemptPhase, DeviceMonitor, HotSpot, HotSpotError,
    HotSpotItem, ItemClass, Mounted, PresentationSurface, QuestionComponent, QuestionConfig,
    QuestionLifecycle, RecordingSurface, ScreenSize,
};

struct FakeGmcq {
    config: QuestionConfig,
    rendered: bool,
}

impl QuestionComponent for FakeGmcq {
    fn component_name(&self) -> &str {
        &self.config.component
    }

    fn config(&self) -> &QuestionConfig {
        &self.config
    }

    fn re_render(&mut self) {
        self.rendered = true;
    }
}

#[derive(Default)]
struct FakeGmcqFactory {
    created: Cell<usize>,
}

impl AlternateComponentFactory for FakeGmcqFactory {
    fn create(
        &self,
        config: QuestionConfig,
        _surface: Box<dyn PresentationSurface>,
    ) -> Box<dyn QuestionComponent> {
        self.created.set(self.created.get() + 1);
        Box::new(FakeGmcq {
            config,
            rendered: false,
        })
    }
}

fn question(key: &[bool], selectable: usize) -> QuestionConfig {
    let items = key
        .iter()
        .enumerate()
        .map(|(i, &should)| HotSpotItem::new(format!("区域{}", i + 1), should))
        .collect();
    QuestionConfig::new(items)
        .with_selectable(selectable)
        .with_question_weight(3.0)
}

fn mount(config: QuestionConfig) -> (HotSpot, RecordingSurface, DeviceMonitor) {
    let surface = RecordingSurface::new(config.items.len());
    let device = DeviceMonitor::new(ScreenSize::Large);
    let mounted = HotSpot::initialize(
        config,
        Box::new(surface.clone()),
        &device,
        Alternate::missing("gmcq"),
    )
    .expect("初始化失败");

    match mounted {
        Mounted::Native(hot_spot) => (hot_spot, surface, device),
        Mounted::Substituted(_) => panic!("大屏幕不应替换"),
    }
}

fn selected(hot_spot: &HotSpot) -> Vec<bool> {
    hot_spot.attempt().selection()
}

#[test]
fn test_scenario_a_fully_correct() {
    let (mut hot_spot, _, _) = mount(question(&[true, false], 2));
    hot_spot.on_item_selected(1);

    assert!(hot_spot.is_correct());
    hot_spot.set_score();
    assert_eq!(hot_spot.score(), 3.0);
}

#[test]
fn test_scenario_b_wrong_item() {
    let (mut hot_spot, _, _) = mount(question(&[true, false], 2));
    hot_spot.on_item_selected(2);

    assert!(!hot_spot.is_correct());
    assert!(!hot_spot.attempt().is_at_least_one_correct_selection);
    assert!(!hot_spot.is_partly_correct());
    hot_spot.set_score();
    assert_eq!(hot_spot.score(), 0.0);
}

#[test]
fn test_scenario_c_partly_correct() {
    let (mut hot_spot, _, _) = mount(question(&[true, true], 2));
    hot_spot.on_item_selected(1);

    assert!(!hot_spot.is_correct());
    assert!(hot_spot.is_partly_correct());
    assert_eq!(hot_spot.attempt().number_of_required_answers, 2);
    assert_eq!(hot_spot.attempt().number_of_correct_answers, 1);

    // 部分正确没有部分分
    hot_spot.set_score();
    assert_eq!(hot_spot.score(), 0.0);
}

#[test]
fn test_scenario_d_single_select_keeps_last() {
    let (mut hot_spot, surface, _) = mount(question(&[true, false, false], 1));
    hot_spot.on_item_selected(1);
    hot_spot.on_item_selected(2);

    assert_eq!(selected(&hot_spot), vec![false, true, false]);
    assert!(!surface.has_class(0, ItemClass::Selected));
    assert!(surface.has_class(1, ItemClass::Selected));
}

#[test]
fn test_single_select_never_has_two_selected() {
    let (mut hot_spot, _, _) = mount(question(&[true, false, true, false], 1));
    for position in [1, 3, 3, 2, 4, 1, 2, 2, 4] {
        hot_spot.on_item_selected(position);
        assert!(hot_spot.attempt().selected_count() <= 1);
    }
}

#[test]
fn test_multi_select_toggles_independently() {
    let (mut hot_spot, _, _) = mount(question(&[true, false, true], 3));
    hot_spot.on_item_selected(1);
    hot_spot.on_item_selected(3);
    hot_spot.on_item_selected(2);
    hot_spot.on_item_selected(2);

    assert_eq!(selected(&hot_spot), vec![true, false, true]);
    assert!(hot_spot.is_correct());
}

#[test]
fn test_scenario_e_can_submit() {
    let (mut hot_spot, surface, _) = mount(question(&[true, false], 2));
    assert!(!hot_spot.can_submit());
    assert!(surface.is_before_submit());

    hot_spot.on_item_selected(2);
    assert!(hot_spot.can_submit());
    assert!(!surface.is_before_submit());
}

#[test]
fn test_out_of_range_position_is_ignored() {
    let (mut hot_spot, _, _) = mount(question(&[true, false], 2));
    hot_spot.on_item_selected(0);
    hot_spot.on_item_selected(3);
    assert_eq!(selected(&hot_spot), vec![false, false]);
}

#[test]
fn test_closed_gate_ignores_toggles() {
    let (mut hot_spot, _, _) = mount(question(&[true, false], 2));
    hot_spot.on_item_selected(1);

    hot_spot.set_submitted(true);
    hot_spot.on_item_selected(1);
    hot_spot.on_item_selected(2);
    assert_eq!(selected(&hot_spot), vec![true, false]);

    hot_spot.set_submitted(false);
    hot_spot.disable_question();
    hot_spot.on_item_selected(2);
    assert_eq!(selected(&hot_spot), vec![true, false]);

    hot_spot.enable_question();
    hot_spot.on_item_selected(2);
    assert_eq!(selected(&hot_spot), vec![true, true]);
}

#[test]
fn test_grading_is_idempotent() {
    let (mut hot_spot, _, _) = mount(question(&[true, true, false], 3));
    hot_spot.on_item_selected(2);
    hot_spot.on_item_selected(3);

    let first = hot_spot.is_correct();
    let first_attempt = hot_spot.attempt().clone();
    let second = hot_spot.is_correct();

    assert_eq!(first, second);
    assert_eq!(&first_attempt, hot_spot.attempt());
}

#[test]
fn test_reset_restores_pristine_state() {
    let (mut hot_spot, surface, _) = mount(question(&[true, false, true], 3));
    hot_spot.on_item_selected(1);
    hot_spot.on_item_selected(2);
    hot_spot.set_submitted(true);
    assert!(hot_spot.can_submit());
    hot_spot.is_correct();
    hot_spot.set_score();
    hot_spot.show_marking();

    hot_spot.reset_question_on_revisit();

    let attempt = hot_spot.attempt();
    assert!(attempt.items.iter().all(|s| !s.is_selected && !s.is_correct));
    assert!(!attempt.is_at_least_one_correct_selection);
    assert_eq!(attempt.phase, AttemptPhase::Unanswered);
    assert!(!hot_spot.config().is_submitted);
    assert!(surface.is_before_submit());
    for index in 0..3 {
        assert!(surface.classes(index).is_empty());
    }

    // 重置后可以重新作答
    hot_spot.on_item_selected(1);
    hot_spot.on_item_selected(3);
    assert!(hot_spot.is_correct());
}

#[test]
fn test_show_marking_classes() {
    let (mut hot_spot, surface, _) = mount(question(&[true, false, true], 3));
    hot_spot.on_item_selected(1);
    hot_spot.on_item_selected(2);
    hot_spot.is_correct();
    hot_spot.show_marking();

    assert_eq!(surface.classes(0), vec![ItemClass::Selected, ItemClass::Correct]);
    assert_eq!(surface.classes(1), vec![ItemClass::Selected, ItemClass::Incorrect]);
    assert_eq!(surface.classes(2), vec![ItemClass::NotSelected, ItemClass::Incorrect]);
    assert_eq!(hot_spot.attempt().phase, AttemptPhase::Submitted);
}

#[test]
fn test_show_and_hide_correct_answer() {
    let (mut hot_spot, surface, _) = mount(question(&[true, false, true], 3));
    hot_spot.on_item_selected(1);
    hot_spot.on_item_selected(2);
    hot_spot.is_correct();
    hot_spot.show_marking();

    hot_spot.show_correct_answer();
    assert!(surface.has_class(0, ItemClass::Correct));
    assert!(surface.has_class(1, ItemClass::Incorrect));
    assert_eq!(surface.classes(2), vec![ItemClass::Correct]);
    assert_eq!(hot_spot.attempt().phase, AttemptPhase::ShowingCorrectAnswer);

    hot_spot.hide_correct_answer();
    assert_eq!(surface.classes(2), vec![ItemClass::NotSelected, ItemClass::Incorrect]);
    assert!(!surface.has_class(1, ItemClass::NotSelected));
    assert_eq!(hot_spot.attempt().phase, AttemptPhase::ShowingUserAnswer);

    // 可重复切换
    hot_spot.show_correct_answer();
    hot_spot.show_correct_answer();
    assert_eq!(surface.classes(2), vec![ItemClass::Correct]);
}

#[test]
fn test_scenario_f_small_screen_substitutes_immediately() {
    let factory = Rc::new(FakeGmcqFactory::default());
    let surface = RecordingSurface::new(2);
    let device = DeviceMonitor::new(ScreenSize::Small);

    let mounted = HotSpot::initialize(
        question(&[true, false], 1),
        Box::new(surface.clone()),
        &device,
        Alternate::new("gmcq", factory.clone()),
    )
    .expect("应替换为 gmcq");

    match mounted {
        Mounted::Substituted(component) => {
            assert_eq!(component.component_name(), "gmcq");
            assert!(component.config().was_hot_spot);
            assert_eq!(component.config().items.len(), 2);
        }
        Mounted::Native(_) => panic!("小屏幕不应原生显示"),
    }
    assert_eq!(factory.created.get(), 1);
    assert_eq!(device.subscriber_count(), 0);
    assert!(surface.classes(0).is_empty());
}

#[test]
fn test_scenario_f_missing_alternate_is_fatal() {
    let device = DeviceMonitor::new(ScreenSize::Medium);
    let result = HotSpot::initialize(
        question(&[true, false], 1),
        Box::new(RecordingSurface::new(2)),
        &device,
        Alternate::missing("gmcq"),
    );

    let err = result.unwrap_err();
    assert!(matches!(
        &err,
        HotSpotError::AlternateComponentMissing { component } if component == "gmcq"
    ));
    assert!(err.to_string().contains("gmcq"));
    assert_eq!(device.subscriber_count(), 0);
}

#[test]
fn test_invalid_config_rejected() {
    let device = DeviceMonitor::new(ScreenSize::Large);
    let result = HotSpot::initialize(
        question(&[true], 0),
        Box::new(RecordingSurface::new(1)),
        &device,
        Alternate::missing("gmcq"),
    );
    assert!(matches!(result, Err(HotSpotError::InvalidConfig { .. })));
}
