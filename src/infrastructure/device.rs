//! 设备变化通知 - 基础设施层
//!
//! 订阅在初始化时获取，在组件销毁时释放。
//! 每个订阅者按顺序收到全部通知，中间的小屏幕不会被后续变化覆盖

use std::cell::{Cell, RefCell};

use tokio::sync::mpsc;
use tracing::debug;

use crate::models::screen::ScreenSize;

/// 设备监视器
///
/// 宿主持有，视口尺寸分类变化时通知所有订阅者
#[derive(Debug)]
pub struct DeviceMonitor {
    current: Cell<ScreenSize>,
    subscribers: RefCell<Vec<mpsc::UnboundedSender<ScreenSize>>>,
}

impl DeviceMonitor {
    pub fn new(initial: ScreenSize) -> Self {
        Self {
            current: Cell::new(initial),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// 更新视口尺寸，只在分类变化时通知
    ///
    /// # 返回
    /// 返回是否发生了变化
    pub fn set_screen_size(&self, size: ScreenSize) -> bool {
        let previous = self.current.get();
        if previous == size {
            return false;
        }

        debug!("device:changed {} -> {}", previous, size);
        self.current.set(size);

        // 已释放的订阅在发送失败时移除
        self.subscribers
            .borrow_mut()
            .retain(|subscriber| subscriber.send(size).is_ok());
        true
    }

    pub fn subscribe(&self) -> DeviceSubscription {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.subscribers.borrow_mut().push(sender);
        DeviceSubscription {
            current: self.current.get(),
            receiver,
        }
    }

    /// 当前仍存活的订阅数量
    pub fn subscriber_count(&self) -> usize {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|subscriber| !subscriber.is_closed());
        subscribers.len()
    }
}

/// 设备变化订阅，丢弃即取消订阅
#[derive(Debug)]
pub struct DeviceSubscription {
    current: ScreenSize,
    receiver: mpsc::UnboundedReceiver<ScreenSize>,
}

impl DeviceSubscription {
    /// 最近处理过的视口尺寸
    pub fn current(&self) -> ScreenSize {
        self.current
    }

    /// 按到达顺序取出下一条尚未处理的变化
    pub fn take_change(&mut self) -> Option<ScreenSize> {
        let size = self.receiver.try_recv().ok()?;
        self.current = size;
        Some(size)
    }

    /// 等待下一次变化；监视器被丢弃时返回 `None`
    pub async fn changed(&mut self) -> Option<ScreenSize> {
        let size = self.receiver.recv().await?;
        self.current = size;
        Some(size)
    }
}

impl Drop for DeviceSubscription {
    fn drop(&mut self) {
        debug!("释放设备变化订阅");
    }
}
