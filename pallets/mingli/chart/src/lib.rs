//! # 命理模块 - 四柱排盘
//!
//! 本模块负责命盘的上链存储与免费查询。
//!
//! ## 功能概述
//!
//! - **命盘创建**:外部历法换算好年月日三柱与时干后提交,链上校验并存储
//! - **命盘删除**:仅所有者可删除
//! - **免费查询**:解盘明细、五行分布、速断取样,实时计算不占存储
//!
//! ## 设计要点
//!
//! 历法换算(节气、闰月)不在链上进行,调用方提交干支序号,
//! 链上只负责奇偶校验、时辰换算与查表计算,保证同一命盘
//! 在任何节点上得到完全一致的结果。

#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

#[cfg(test)]
mod mock;


use frame_support::pallet_prelude::*;
use frame_system::pallet_prelude::*;

use pallet_mingli_common::{
    calculations, ChartProvider, GanZhiSymbol, PaiPanError, PillarInput, SiZhu, SiZhuDetail,
    WuXingCount,
};

pub const LOG_TARGET: &str = "runtime::mingli-chart";

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    /// Pallet 配置
    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// 运行时事件类型
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// 每个账户最多创建的命盘数量
        #[pallet::constant]
        type MaxChartsPerAccount: Get<u32>;

        /// 权重信息
        type WeightInfo: WeightInfo;
    }

    // ========================================================================
    // 类型定义
    // ========================================================================

    /// 链上命盘
    #[derive(Clone, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
    #[scale_info(skip_type_params(T))]
    pub struct Chart<T: Config> {
        pub owner: T::AccountId,
        /// 命盘名称(可选,最大 32 字节 UTF-8)
        pub name: BoundedVec<u8, ConstU32<32>>,
        pub sizhu: SiZhu,
        pub created_at: BlockNumberFor<T>,
    }

    // ========================================================================
    // 存储
    // ========================================================================

    /// 命盘 ID 计数器
    #[pallet::storage]
    #[pallet::getter(fn next_chart_id)]
    pub type NextChartId<T: Config> = StorageValue<_, u64, ValueQuery>;

    /// 命盘存储: 命盘ID -> 命盘
    #[pallet::storage]
    #[pallet::getter(fn chart_by_id)]
    pub type ChartById<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        u64,
        Chart<T>,
    >;

    /// 用户命盘索引: 账户 -> 命盘ID列表
    #[pallet::storage]
    #[pallet::getter(fn user_charts)]
    pub type UserCharts<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        BoundedVec<u64, T::MaxChartsPerAccount>,
        ValueQuery,
    >;

    // ========================================================================
    // 事件
    // ========================================================================

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// 命盘已创建
        ChartCreated {
            owner: T::AccountId,
            chart_id: u64,
        },
        /// 命盘已删除
        ChartDeleted {
            owner: T::AccountId,
            chart_id: u64,
        },
    }

    // ========================================================================
    // 错误
    // ========================================================================

    #[pallet::error]
    pub enum Error<T> {
        /// 无效的天干序号
        InvalidTianGan,
        /// 无效的地支序号
        InvalidDiZhi,
        /// 无效的时辰
        InvalidHour,
        /// 干支奇偶不一致
        PillarParityMismatch,
        /// 命盘数量已达上限
        TooManyCharts,
        /// 命盘不存在
        ChartNotFound,
        /// 非命盘所有者
        NotChartOwner,
        /// 命盘 ID 已达最大值
        ChartIdOverflow,
    }

    // ========================================================================
    // Extrinsics
    // ========================================================================

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// 创建命盘
        ///
        /// 年月日三柱由外部历法换算后以干支序号提交,时柱地支由
        /// 时辰推出,时干按日干起时规则由调用方给定。
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::create_chart())]
        pub fn create_chart(
            origin: OriginFor<T>,
            name: Option<BoundedVec<u8, ConstU32<32>>>,
            year: PillarInput,
            month: PillarInput,
            day: PillarInput,
            hour_gan: u8,
            hour: u8,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            let existing_charts = UserCharts::<T>::get(&who);
            ensure!(
                existing_charts.len() < T::MaxChartsPerAccount::get() as usize,
                Error::<T>::TooManyCharts
            );

            let sizhu = calculations::resolve_sizhu(year, month, day, hour_gan, hour)
                .map_err(Self::map_paipan_error)?;

            let chart_id = NextChartId::<T>::get();
            ensure!(chart_id < u64::MAX, Error::<T>::ChartIdOverflow);

            let chart = Chart {
                owner: who.clone(),
                name: name.unwrap_or_default(),
                sizhu,
                created_at: frame_system::Pallet::<T>::block_number(),
            };

            ChartById::<T>::insert(chart_id, chart);

            UserCharts::<T>::try_mutate(&who, |charts| {
                charts.try_push(chart_id).map_err(|_| Error::<T>::TooManyCharts)
            })?;

            NextChartId::<T>::put(chart_id.saturating_add(1));

            log::info!(
                target: LOG_TARGET,
                "命盘已创建: id={}, 日柱={}{}",
                chart_id,
                sizhu.day.gan.name(),
                sizhu.day.zhi.name(),
            );

            Self::deposit_event(Event::ChartCreated {
                owner: who,
                chart_id,
            });

            Ok(())
        }

        /// 删除命盘
        ///
        /// 只有命盘所有者可以删除自己的命盘。
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::delete_chart())]
        pub fn delete_chart(origin: OriginFor<T>, chart_id: u64) -> DispatchResult {
            let who = ensure_signed(origin)?;

            let chart = ChartById::<T>::get(chart_id).ok_or(Error::<T>::ChartNotFound)?;
            ensure!(chart.owner == who, Error::<T>::NotChartOwner);

            ChartById::<T>::remove(chart_id);

            UserCharts::<T>::mutate(&who, |charts| {
                if let Some(pos) = charts.iter().position(|&id| id == chart_id) {
                    charts.remove(pos);
                }
            });

            log::debug!(target: LOG_TARGET, "命盘已删除: id={}", chart_id);

            Self::deposit_event(Event::ChartDeleted {
                owner: who,
                chart_id,
            });

            Ok(())
        }
    }

    // ========================================================================
    // 辅助函数与免费查询
    // ========================================================================

    impl<T: Config> Pallet<T> {
        /// 排盘错误转换为 pallet 错误
        fn map_paipan_error(error: PaiPanError) -> Error<T> {
            match error {
                PaiPanError::InvalidGanIndex => Error::<T>::InvalidTianGan,
                PaiPanError::InvalidZhiIndex => Error::<T>::InvalidDiZhi,
                PaiPanError::InvalidHour => Error::<T>::InvalidHour,
                PaiPanError::ParityMismatch => Error::<T>::PillarParityMismatch,
            }
        }

        /// RPC 接口:四柱解盘明细(实时计算,不消耗 gas,不上链)
        ///
        /// 每柱返回干支五行、柱干十神、藏干十神、十二运星与神煞,
        /// 参照系为日柱。
        pub fn chart_detail(chart_id: u64) -> Option<SiZhuDetail> {
            let chart = ChartById::<T>::get(chart_id)?;
            Some(calculations::sizhu_detail(&chart.sizhu))
        }

        /// RPC 接口:完整八字的五行分布
        pub fn wuxing_distribution(chart_id: u64) -> Option<WuXingCount> {
            let chart = ChartById::<T>::get(chart_id)?;
            Some(WuXingCount::from_sizhu(&chart.sizhu))
        }

        /// RPC 接口:速断五行取样(年干、年支、时支三符号)
        ///
        /// 面向轻量场景的粗粒度分布,与完整八字分布并存。
        pub fn quick_wuxing_distribution(chart_id: u64) -> Option<WuXingCount> {
            let chart = ChartById::<T>::get(chart_id)?;
            let samples = [
                GanZhiSymbol::Gan(chart.sizhu.year.gan),
                GanZhiSymbol::Zhi(chart.sizhu.year.zhi),
                GanZhiSymbol::Zhi(chart.sizhu.hour.zhi),
            ];
            Some(WuXingCount::tally(&samples))
        }
    }
}

// ============================================================================
// ChartProvider 实现
// ============================================================================

impl<T: Config> ChartProvider<T::AccountId> for Pallet<T> {
    fn chart_exists(chart_id: u64) -> bool {
        ChartById::<T>::contains_key(chart_id)
    }

    fn is_owner(who: &T::AccountId, chart_id: u64) -> bool {
        ChartById::<T>::get(chart_id)
            .map(|chart| chart.owner == *who)
            .unwrap_or(false)
    }

    fn get_sizhu(chart_id: u64) -> Option<SiZhu> {
        ChartById::<T>::get(chart_id).map(|chart| chart.sizhu)
    }

    fn get_wuxing_count(chart_id: u64) -> Option<WuXingCount> {
        Self::wuxing_distribution(chart_id)
    }
}
