use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result};
use hot_spot::models::load_question_config;
use hot_spot::utils::logging;
use hot_spot::{
    Alternate, AlternateComponentFactory, ComponentRegistry, Config, DeviceMonitor, HotSpot,
    Mounted, PresentationSurface, QuestionComponent, QuestionConfig, ScreenSize, SubmitFlow,
    SubmitOutcome, TracingSurface,
};
use tokio::sync::oneshot;
use tracing::{info, warn};

/// 只输出日志的备用组件
struct LoggingAlternate {
    config: QuestionConfig,
    _surface: Box<dyn PresentationSurface>,
}

impl QuestionComponent for LoggingAlternate {
    fn component_name(&self) -> &str {
        &self.config.component
    }

    fn config(&self) -> &QuestionConfig {
        &self.config
    }

    fn re_render(&mut self) {
        info!(
            "🔁 {} 渲染 {} 个选项 (_wasHotSpot: {})",
            self.config.component,
            self.config.items.len(),
            self.config.was_hot_spot
        );
    }
}

struct LoggingAlternateFactory;

impl AlternateComponentFactory for LoggingAlternateFactory {
    fn create(
        &self,
        config: QuestionConfig,
        surface: Box<dyn PresentationSurface>,
    ) -> Box<dyn QuestionComponent> {
        Box::new(LoggingAlternate {
            config,
            _surface: surface,
        })
    }
}

/// 解析命令行：`[题目文件] [区域编号...]`，区域编号从 1 开始
fn parse_args(config: &Config, args: &[String]) -> Result<(String, Vec<usize>)> {
    let (question_file, rest) = match args.first() {
        Some(first) if first.ends_with(".json") || first.ends_with(".toml") => {
            (first.clone(), &args[1..])
        }
        _ => (config.question_file.clone(), args),
    };

    let positions = rest
        .iter()
        .map(|arg| {
            arg.parse::<usize>()
                .with_context(|| format!("区域编号不合法: {}", arg))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((question_file, positions))
}

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logging::init(config.verbose_logging);
    logging::log_startup(&config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (question_file, positions) = parse_args(&config, &args)?;

    let question = load_question_config(Path::new(&question_file))
        .await
        .with_context(|| format!("无法加载题目文件: {}", question_file))?;

    let mut registry = ComponentRegistry::new();
    registry.register(
        config.alternate_component.clone(),
        Rc::new(LoggingAlternateFactory),
    );

    let device = DeviceMonitor::new(ScreenSize::from_width(
        config.screen_width,
        &config.breakpoints,
    ));
    let surface = TracingSurface::new(question.items.len());
    let alternate = Alternate::from_registry(&registry, &config.alternate_component);

    let mut hot_spot = match HotSpot::initialize(question, Box::new(surface), &device, alternate)? {
        Mounted::Native(hot_spot) => hot_spot,
        Mounted::Substituted(component) => {
            info!("✓ 小屏幕，已使用 {} 显示题目", component.component_name());
            return Ok(());
        }
    };

    // 命令行没有真实图片，直接通知加载完成
    let (image_ready, image_loaded) = oneshot::channel();
    let _ = image_ready.send(());
    hot_spot
        .on_question_rendered(image_loaded, || info!("✓ 题目就绪"))
        .await;

    for position in positions {
        hot_spot.on_item_selected(position);
    }

    match SubmitFlow::submit(&mut hot_spot) {
        SubmitOutcome::CannotSubmit => warn!("⚠️ 未选择任何区域，无法提交"),
        SubmitOutcome::Submitted(feedback) => info!(
            "✅ 结果: {:?}, 得分 {}/{}",
            feedback.correctness,
            feedback.score,
            hot_spot.config().question_weight
        ),
    }

    Ok(())
}
