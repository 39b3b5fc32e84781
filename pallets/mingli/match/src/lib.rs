//! # 命理模块 - 八字合婚
//!
//! 本模块提供八字合婚的请求管理与评分。
//!
//! ## 功能概述
//!
//! - **合婚请求管理**:创建、授权、拒绝、取消
//! - **合婚评分**:干支关系、五行互补、配偶星三项合成总分
//! - **报告存储**:每个请求只生成一份报告,重复请求直接复用
//!
//! 评分为纯查表计算,同一对命盘在任何节点上得到完全一致的分数。

#![cfg_attr(not(feature = "std"), no_std)]

pub use pallet::*;

pub mod weights;
pub use weights::WeightInfo;

pub mod hehun;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

#[cfg(test)]
mod mock;

#[cfg(test)]
mod tests;

use frame_support::pallet_prelude::*;
use frame_system::pallet_prelude::*;
use sp_runtime::traits::Saturating;

use hehun::calculate_hehun_score;
use pallet_mingli_common::{ChartProvider, HeHunScore, MatchRecommendation, MatchStatus};

pub const LOG_TARGET: &str = "runtime::mingli-match";

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

        /// 命盘数据提供者
        type ChartProvider: ChartProvider<Self::AccountId>;

        /// 每个用户最大请求数
        #[pallet::constant]
        type MaxRequestsPerUser: Get<u32>;

        /// 请求过期时间(区块数)
        #[pallet::constant]
        type RequestExpiration: Get<BlockNumberFor<Self>>;

        /// 权重信息
        type WeightInfo: WeightInfo;
    }

    // ========================================================================
    // 类型定义
    // ========================================================================

    /// 合婚请求
    #[derive(Clone, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
    #[scale_info(skip_type_params(T))]
    pub struct MatchRequest<T: Config> {
        pub id: u64,
        pub party_a: T::AccountId,
        pub party_b: T::AccountId,
        pub party_a_chart_id: u64,
        pub party_b_chart_id: u64,
        pub status: MatchStatus,
        pub created_at: BlockNumberFor<T>,
        pub authorized_at: Option<BlockNumberFor<T>>,
    }

    /// 合婚报告
    #[derive(Clone, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
    #[scale_info(skip_type_params(T))]
    pub struct MatchReport<T: Config> {
        pub id: u64,
        pub request_id: u64,
        /// 评分明细(含总分)
        pub score: HeHunScore,
        pub recommendation: MatchRecommendation,
        pub generated_at: BlockNumberFor<T>,
        pub algorithm_version: u8,
    }

    // ========================================================================
    // 存储
    // ========================================================================

    /// 合婚请求存储
    #[pallet::storage]
    #[pallet::getter(fn requests)]
    pub type Requests<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        u64,
        MatchRequest<T>,
    >;

    /// 合婚报告存储,键为请求 ID
    #[pallet::storage]
    #[pallet::getter(fn reports)]
    pub type Reports<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        u64,
        MatchReport<T>,
    >;

    /// 用户请求索引(甲方)
    #[pallet::storage]
    #[pallet::getter(fn user_requests_as_party_a)]
    pub type UserRequestsAsPartyA<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        BoundedVec<u64, T::MaxRequestsPerUser>,
        ValueQuery,
    >;

    /// 用户请求索引(乙方)
    #[pallet::storage]
    #[pallet::getter(fn user_requests_as_party_b)]
    pub type UserRequestsAsPartyB<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        BoundedVec<u64, T::MaxRequestsPerUser>,
        ValueQuery,
    >;

    /// 请求 ID 计数器
    #[pallet::storage]
    #[pallet::getter(fn next_request_id)]
    pub type NextRequestId<T: Config> = StorageValue<_, u64, ValueQuery>;

    // ========================================================================
    // 事件
    // ========================================================================

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// 合婚请求已创建
        RequestCreated {
            request_id: u64,
            party_a: T::AccountId,
            party_b: T::AccountId,
        },
        /// 合婚请求已授权
        RequestAuthorized {
            request_id: u64,
            party_b: T::AccountId,
        },
        /// 合婚请求已拒绝
        RequestRejected {
            request_id: u64,
            party_b: T::AccountId,
        },
        /// 合婚请求已取消
        RequestCancelled {
            request_id: u64,
            cancelled_by: T::AccountId,
        },
        /// 合婚报告已生成
        ReportGenerated {
            report_id: u64,
            request_id: u64,
            overall_score: u8,
            recommendation: MatchRecommendation,
        },
    }

    // ========================================================================
    // 错误
    // ========================================================================

    #[pallet::error]
    pub enum Error<T> {
        /// 请求不存在
        RequestNotFound,
        /// 报告不存在
        ReportNotFound,
        /// 未授权
        NotAuthorized,
        /// 不是命盘所有者
        NotChartOwner,
        /// 命盘不存在
        ChartNotFound,
        /// 请求已过期
        RequestExpired,
        /// 请求状态无效
        InvalidRequestStatus,
        /// 不能给自己创建请求
        CannotMatchSelf,
        /// 请求数已达上限
        TooManyRequests,
        /// 报告已存在
        ReportAlreadyExists,
    }

    // ========================================================================
    // Extrinsics
    // ========================================================================

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// 创建合婚请求
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::create_request())]
        pub fn create_request(
            origin: OriginFor<T>,
            party_b: T::AccountId,
            party_a_chart_id: u64,
            party_b_chart_id: u64,
        ) -> DispatchResult {
            let party_a = ensure_signed(origin)?;

            ensure!(party_a != party_b, Error::<T>::CannotMatchSelf);

            ensure!(
                T::ChartProvider::is_owner(&party_a, party_a_chart_id),
                Error::<T>::NotChartOwner
            );

            ensure!(
                T::ChartProvider::chart_exists(party_a_chart_id),
                Error::<T>::ChartNotFound
            );
            ensure!(
                T::ChartProvider::chart_exists(party_b_chart_id),
                Error::<T>::ChartNotFound
            );

            let mut party_a_requests = UserRequestsAsPartyA::<T>::get(&party_a);
            ensure!(
                party_a_requests.len() < T::MaxRequestsPerUser::get() as usize,
                Error::<T>::TooManyRequests
            );

            let request_id = NextRequestId::<T>::get();
            let current_block = frame_system::Pallet::<T>::block_number();

            let request = MatchRequest {
                id: request_id,
                party_a: party_a.clone(),
                party_b: party_b.clone(),
                party_a_chart_id,
                party_b_chart_id,
                status: MatchStatus::PendingAuthorization,
                created_at: current_block,
                authorized_at: None,
            };

            Requests::<T>::insert(request_id, request);
            NextRequestId::<T>::put(request_id.saturating_add(1));

            party_a_requests
                .try_push(request_id)
                .map_err(|_| Error::<T>::TooManyRequests)?;
            UserRequestsAsPartyA::<T>::insert(&party_a, party_a_requests);

            let mut party_b_requests = UserRequestsAsPartyB::<T>::get(&party_b);
            let _ = party_b_requests.try_push(request_id);
            UserRequestsAsPartyB::<T>::insert(&party_b, party_b_requests);

            Self::deposit_event(Event::RequestCreated {
                request_id,
                party_a,
                party_b,
            });

            Ok(())
        }

        /// 授权合婚请求
        ///
        /// 乙方确认使用自己的命盘参与合婚,过期请求不可授权。
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::authorize_request())]
        pub fn authorize_request(origin: OriginFor<T>, request_id: u64) -> DispatchResult {
            let party_b = ensure_signed(origin)?;

            Requests::<T>::try_mutate(request_id, |maybe_request| {
                let request = maybe_request.as_mut().ok_or(Error::<T>::RequestNotFound)?;

                ensure!(request.party_b == party_b, Error::<T>::NotAuthorized);

                ensure!(
                    request.status == MatchStatus::PendingAuthorization,
                    Error::<T>::InvalidRequestStatus
                );

                ensure!(
                    T::ChartProvider::is_owner(&party_b, request.party_b_chart_id),
                    Error::<T>::NotChartOwner
                );

                let current_block = frame_system::Pallet::<T>::block_number();
                let expiration = request.created_at.saturating_add(T::RequestExpiration::get());
                ensure!(current_block <= expiration, Error::<T>::RequestExpired);

                request.status = MatchStatus::Authorized;
                request.authorized_at = Some(current_block);

                Self::deposit_event(Event::RequestAuthorized {
                    request_id,
                    party_b,
                });

                Ok(())
            })
        }

        /// 拒绝合婚请求
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::reject_request())]
        pub fn reject_request(origin: OriginFor<T>, request_id: u64) -> DispatchResult {
            let party_b = ensure_signed(origin)?;

            Requests::<T>::try_mutate(request_id, |maybe_request| {
                let request = maybe_request.as_mut().ok_or(Error::<T>::RequestNotFound)?;

                ensure!(request.party_b == party_b, Error::<T>::NotAuthorized);

                ensure!(
                    request.status == MatchStatus::PendingAuthorization,
                    Error::<T>::InvalidRequestStatus
                );

                request.status = MatchStatus::Rejected;

                Self::deposit_event(Event::RequestRejected {
                    request_id,
                    party_b,
                });

                Ok(())
            })
        }

        /// 取消合婚请求
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::cancel_request())]
        pub fn cancel_request(origin: OriginFor<T>, request_id: u64) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Requests::<T>::try_mutate(request_id, |maybe_request| {
                let request = maybe_request.as_mut().ok_or(Error::<T>::RequestNotFound)?;

                ensure!(request.party_a == who, Error::<T>::NotAuthorized);

                ensure!(
                    request.status == MatchStatus::PendingAuthorization
                        || request.status == MatchStatus::Authorized,
                    Error::<T>::InvalidRequestStatus
                );

                request.status = MatchStatus::Cancelled;

                Self::deposit_event(Event::RequestCancelled {
                    request_id,
                    cancelled_by: who,
                });

                Ok(())
            })
        }

        /// 生成合婚报告
        ///
        /// 双方任一方可触发,每个请求只生成一份报告。
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::generate_report())]
        pub fn generate_report(origin: OriginFor<T>, request_id: u64) -> DispatchResult {
            let who = ensure_signed(origin)?;

            let request = Requests::<T>::get(request_id).ok_or(Error::<T>::RequestNotFound)?;

            ensure!(
                who == request.party_a || who == request.party_b,
                Error::<T>::NotAuthorized
            );

            ensure!(
                request.status == MatchStatus::Authorized,
                Error::<T>::InvalidRequestStatus
            );

            ensure!(
                !Reports::<T>::contains_key(request_id),
                Error::<T>::ReportAlreadyExists
            );

            // 获取双方四柱
            let sizhu_a = T::ChartProvider::get_sizhu(request.party_a_chart_id)
                .ok_or(Error::<T>::ChartNotFound)?;
            let sizhu_b = T::ChartProvider::get_sizhu(request.party_b_chart_id)
                .ok_or(Error::<T>::ChartNotFound)?;

            let score = calculate_hehun_score(&sizhu_a, &sizhu_b);
            let recommendation = MatchRecommendation::from_score(score.overall);

            log::info!(
                target: LOG_TARGET,
                "合婚报告已生成: request_id={}, 互补={}, 关系={}, 配偶星={}, 总分={}",
                request_id,
                score.wuxing_synergy,
                score.ganzhi_relation,
                score.spouse_star,
                score.overall,
            );

            let current_block = frame_system::Pallet::<T>::block_number();
            let report = MatchReport {
                id: request_id,
                request_id,
                score,
                recommendation,
                generated_at: current_block,
                algorithm_version: 1,
            };

            Reports::<T>::insert(request_id, report);

            Requests::<T>::mutate(request_id, |maybe_request| {
                if let Some(req) = maybe_request {
                    req.status = MatchStatus::Completed;
                }
            });

            Self::deposit_event(Event::ReportGenerated {
                report_id: request_id,
                request_id,
                overall_score: score.overall,
                recommendation,
            });

            Ok(())
        }
    }
}
