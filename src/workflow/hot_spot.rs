//! 热点题引擎 - 流程层
//!
//! 核心职责：维护一次作答的选择、评分和展示状态
//!
//! 状态流转：
//! 1. 初始化 → 大屏幕原生显示 / 小屏幕直接替换为备用组件
//! 2. 切换选择 → 提交（评分、得分、批改）
//! 3. 显示正确答案 / 显示用户答案 / 重置

use std::rc::Rc;

use rand::seq::SliceRandom;
use rand::Rng;
use tokio::sync::oneshot;
use tracing::{debug, error, info, warn};

use crate::error::{HotSpotError, Result};
use crate::infrastructure::{
    AlternateComponentFactory, ComponentRegistry, DeviceMonitor, DeviceSubscription, ItemClass,
    PresentationSurface, QuestionComponent,
};
use crate::models::{AttemptPhase, AttemptState, QuestionConfig};
use crate::services::{
    grade, item_displays, needs_substitution, prepare_alternate_config, score, Disclosure,
    SelectionChange, SelectionController,
};
use crate::utils::logging::truncate_text;
use crate::workflow::lifecycle::QuestionLifecycle;

/// 备用组件
///
/// 由宿主注入；缺少工厂时只有在需要替换时才报错
#[derive(Clone)]
pub struct Alternate {
    pub name: String,
    pub factory: Option<Rc<dyn AlternateComponentFactory>>,
}

impl Alternate {
    pub fn new(name: impl Into<String>, factory: Rc<dyn AlternateComponentFactory>) -> Self {
        Self {
            name: name.into(),
            factory: Some(factory),
        }
    }

    /// 从注册表中查找，未注册时工厂为空
    pub fn from_registry(registry: &ComponentRegistry, name: &str) -> Self {
        Self {
            name: name.to_string(),
            factory: registry.get(name),
        }
    }

    /// 未注册备用组件
    pub fn missing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            factory: None,
        }
    }
}

impl std::fmt::Debug for Alternate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Alternate")
            .field("name", &self.name)
            .field("registered", &self.factory.is_some())
            .finish()
    }
}

/// 初始化或设备变化后的挂载结果
pub enum Mounted {
    /// 热点题原生显示
    Native(HotSpot),
    /// 已被备用组件替换，热点题实例已销毁
    Substituted(Box<dyn QuestionComponent>),
}

impl Mounted {
    pub fn is_native(&self) -> bool {
        matches!(self, Mounted::Native(_))
    }
}

impl std::fmt::Debug for Mounted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mounted::Native(hot_spot) => f.debug_tuple("Native").field(hot_spot).finish(),
            Mounted::Substituted(component) => f
                .debug_tuple("Substituted")
                .field(&component.component_name())
                .finish(),
        }
    }
}

/// 热点题
pub struct HotSpot {
    config: QuestionConfig,
    attempt: AttemptState,
    selection: SelectionController,
    surface: Box<dyn PresentationSurface>,
    alternate: Alternate,
    device: DeviceSubscription,
    is_ready: bool,
}

impl HotSpot {
    /// 初始化热点题
    ///
    /// 订阅设备变化、按需洗牌，然后根据当前视口决定原生显示还是直接替换
    pub fn initialize(
        config: QuestionConfig,
        surface: Box<dyn PresentationSurface>,
        device: &DeviceMonitor,
        alternate: Alternate,
    ) -> Result<Mounted> {
        Self::initialize_with_rng(config, surface, device, alternate, &mut rand::thread_rng())
    }

    /// 使用指定随机数生成器初始化（洗牌可复现）
    pub fn initialize_with_rng<R: Rng + ?Sized>(
        config: QuestionConfig,
        surface: Box<dyn PresentationSurface>,
        device: &DeviceMonitor,
        alternate: Alternate,
        rng: &mut R,
    ) -> Result<Mounted> {
        config.validate()?;

        let item_count = config.items.len();
        let mut hot_spot = Self {
            selection: SelectionController::new(config.selectable),
            attempt: AttemptState::new(item_count),
            config,
            surface,
            alternate,
            device: device.subscribe(),
            is_ready: false,
        };

        hot_spot.setup_question(rng);

        let screen_size = hot_spot.device.current();
        info!(
            "{} 初始化: {} 个区域, {}, 视口 {}",
            hot_spot.tag(),
            item_count,
            if hot_spot.selection.is_single_select() { "单选" } else { "多选" },
            screen_size
        );

        if needs_substitution(screen_size) {
            return hot_spot.substitute().map(Mounted::Substituted);
        }

        hot_spot.render();
        Ok(Mounted::Native(hot_spot))
    }

    fn setup_question<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.config.is_random && self.config.is_enabled {
            self.config.items.shuffle(rng);
            debug!("{} 区域已随机排序", self.tag());
        }
    }

    fn render(&mut self) {
        if self.surface.item_count() != self.config.items.len() {
            warn!(
                "{} 展示层区域数量 {} 与配置 {} 不一致",
                self.tag(),
                self.surface.item_count(),
                self.config.items.len()
            );
        }
        self.surface.set_before_submit(true);
        debug!("{} 题干: {}", self.tag(), truncate_text(&self.config.body, 80));
    }

    // ========== 资源就绪 ==========

    /// 等待背景图加载完成后标记题目就绪
    ///
    /// 没有超时；发送端被丢弃时题目永远不会就绪
    pub async fn on_question_rendered<F: FnOnce()>(
        &mut self,
        image_ready: oneshot::Receiver<()>,
        on_ready: F,
    ) -> bool {
        match image_ready.await {
            Ok(()) => {
                self.is_ready = true;
                info!("{} ✓ 背景图加载完成，题目就绪", self.tag());
                on_ready();
                true
            }
            Err(_) => {
                warn!("{} ⚠️ 背景图加载通知已失效，题目不会就绪", self.tag());
                false
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        self.is_ready
    }

    // ========== 选择 ==========

    /// 处理展示层的点击
    ///
    /// `position` 是区域在渲染列表中的位置，列表第一个元素是背景图
    pub fn on_item_selected(&mut self, position: usize) {
        match SelectionController::index_from_position(position) {
            Some(index) => self.toggle_item(index),
            None => warn!("{} 忽略位置 {} 的点击", self.tag(), position),
        }
    }

    /// 切换答案索引 `index` 处区域的选中状态
    ///
    /// 题目禁用或已提交时忽略
    pub fn toggle_item(&mut self, index: usize) {
        if !self.config.accepts_toggle() {
            debug!(
                "{} 忽略区域 #{} 的切换 (启用: {}, 已提交: {})",
                self.tag(),
                index + 1,
                self.config.is_enabled,
                self.config.is_submitted
            );
            return;
        }

        match self.selection.toggle(&self.attempt.selection(), index) {
            Some(change) => self.publish_selection(change),
            None => warn!(
                "{} 区域索引 {} 超出范围 [0, {})",
                self.tag(),
                index,
                self.attempt.items.len()
            ),
        }
    }

    fn publish_selection(&mut self, change: SelectionChange) {
        let mut next = self.attempt.clone();
        for (state, selected) in next.items.iter_mut().zip(&change.selection) {
            state.is_selected = *selected;
        }
        self.attempt = next;

        for (index, selected) in change.changed {
            if selected {
                self.surface.add_item_class(index, ItemClass::Selected);
            } else {
                self.surface.remove_item_class(index, ItemClass::Selected);
            }
            debug!(
                "{} 区域 #{} {}",
                self.tag(),
                index + 1,
                if selected { "选中" } else { "取消选中" }
            );
        }
    }

    // ========== 答案展示 ==========

    fn disclose(&mut self, disclosure: Disclosure) {
        let displays = item_displays(disclosure, &self.config.items, &self.attempt.items);
        for (index, display) in displays.into_iter().enumerate() {
            if display.not_selected {
                self.surface.add_item_class(index, ItemClass::NotSelected);
            } else if disclosure != Disclosure::Marking {
                self.surface.remove_item_class(index, ItemClass::NotSelected);
            }

            if display.correct {
                self.surface.remove_item_class(index, ItemClass::Incorrect);
                self.surface.add_item_class(index, ItemClass::Correct);
            } else {
                self.surface.remove_item_class(index, ItemClass::Correct);
                self.surface.add_item_class(index, ItemClass::Incorrect);
            }
        }
    }

    // ========== 响应式替换 ==========

    /// 按顺序处理所有尚未处理的设备变化
    ///
    /// 任意一次通知的视口小于大屏幕就替换为备用组件，替换是单向的
    pub fn on_device_changed(mut self) -> Result<Mounted> {
        while let Some(screen_size) = self.device.take_change() {
            if needs_substitution(screen_size) {
                info!("{} 视口变为 {}，替换为备用组件", self.tag(), screen_size);
                return self.substitute().map(Mounted::Substituted);
            }
        }
        Ok(Mounted::Native(self))
    }

    /// 等待下一次设备变化并处理
    ///
    /// 设备监视器被丢弃时保持原生显示
    pub async fn device_changed(mut self) -> Result<Mounted> {
        match self.device.changed().await {
            Some(screen_size) if needs_substitution(screen_size) => {
                info!("{} 视口变为 {}，替换为备用组件", self.tag(), screen_size);
                self.substitute().map(Mounted::Substituted)
            }
            _ => Ok(Mounted::Native(self)),
        }
    }

    fn substitute(self) -> Result<Box<dyn QuestionComponent>> {
        let Some(factory) = self.alternate.factory.clone() else {
            error!(
                "{} ❌ 备用组件 {} 未注册，终止替换",
                self.tag(),
                self.alternate.name
            );
            return Err(HotSpotError::alternate_missing(self.alternate.name));
        };

        let alternate_config =
            prepare_alternate_config(&self.config, &self.attempt, &self.alternate.name);
        let tag = self.tag();

        // 释放设备订阅，把渲染位置交给新组件
        let HotSpot { surface, device, .. } = self;
        drop(device);

        let mut component = factory.create(alternate_config, surface);
        component.re_render();
        info!("{} ✓ 已替换为 {}", tag, component.component_name());

        Ok(component)
    }

    // ========== 访问器 ==========

    pub fn config(&self) -> &QuestionConfig {
        &self.config
    }

    pub fn attempt(&self) -> &AttemptState {
        &self.attempt
    }

    fn tag(&self) -> String {
        if self.config.id.is_empty() {
            "[热点题]".to_string()
        } else {
            format!("[热点题 {}]", self.config.id)
        }
    }
}

impl QuestionLifecycle for HotSpot {
    fn reset_question_on_revisit(&mut self) {
        self.attempt = AttemptState::new(self.config.items.len());
        self.config.is_submitted = false;

        self.surface.set_before_submit(true);
        self.surface.clear_item_classes();

        info!("{} 已重置", self.tag());
    }

    fn can_submit(&mut self) -> bool {
        let can_submit = self.attempt.selected_count() > 0;
        if can_submit {
            self.surface.set_before_submit(false);
        }
        can_submit
    }

    fn on_cannot_submit(&mut self) {
        debug!("{} 未选中任何区域，无法提交", self.tag());
    }

    fn is_correct(&mut self) -> bool {
        let report = grade(&self.config.items, &self.attempt.selection());
        let is_correct = report.is_correct();

        let mut next = self.attempt.clone();
        for (state, correct) in next.items.iter_mut().zip(&report.item_correct) {
            state.is_correct = *correct;
        }
        next.number_of_required_answers = report.number_of_required_answers;
        next.number_of_correct_answers = report.number_of_correct_answers;
        next.is_at_least_one_correct_selection = report.is_at_least_one_correct_selection;
        next.is_correct = is_correct;
        self.attempt = next;

        info!(
            "{} 评分: 选对 {}/{}，多选 {} → {}",
            self.tag(),
            report.number_of_correct_answers,
            report.number_of_required_answers,
            report.number_of_incorrect_answers,
            if is_correct { "正确" } else { "错误" }
        );

        is_correct
    }

    fn set_score(&mut self) {
        self.attempt.score = score(self.attempt.is_correct, self.config.question_weight);
        info!("{} 得分: {}", self.tag(), self.attempt.score);
    }

    fn score(&self) -> f64 {
        self.attempt.score
    }

    fn show_marking(&mut self) {
        self.disclose(Disclosure::Marking);
        self.attempt.phase = AttemptPhase::Submitted;
    }

    fn show_correct_answer(&mut self) {
        self.disclose(Disclosure::CorrectAnswer);
        self.attempt.phase = AttemptPhase::ShowingCorrectAnswer;
    }

    fn hide_correct_answer(&mut self) {
        self.disclose(Disclosure::UserAnswer);
        self.attempt.phase = AttemptPhase::ShowingUserAnswer;
    }

    fn is_partly_correct(&self) -> bool {
        self.attempt.is_at_least_one_correct_selection
    }

    fn set_submitted(&mut self, submitted: bool) {
        self.config.is_submitted = submitted;
    }

    fn disable_question(&mut self) {
        self.config.is_enabled = false;
    }

    fn enable_question(&mut self) {
        self.config.is_enabled = true;
    }
}

impl std::fmt::Debug for HotSpot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HotSpot")
            .field("config", &self.config)
            .field("attempt", &self.attempt)
            .field("alternate", &self.alternate)
            .field("is_ready", &self.is_ready)
            .finish_non_exhaustive()
    }
}
