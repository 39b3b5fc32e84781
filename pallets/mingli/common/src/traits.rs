//! # 跨 pallet 接口定义

use crate::types::{SiZhu, WuXingCount};

/// 命盘数据提供者
///
/// 由排盘 pallet 实现,合婚 pallet 通过它读取双方四柱,
/// 避免两个 pallet 之间的直接耦合。
pub trait ChartProvider<AccountId> {
    /// 命盘是否存在
    fn chart_exists(chart_id: u64) -> bool;

    /// 命盘是否归该账户所有
    fn is_owner(who: &AccountId, chart_id: u64) -> bool;

    /// 读取命盘四柱
    fn get_sizhu(chart_id: u64) -> Option<SiZhu>;

    /// 读取命盘五行分布
    fn get_wuxing_count(chart_id: u64) -> Option<WuXingCount>;
}
