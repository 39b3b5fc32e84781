//! # Mingli Chart Pallet Benchmarking
//!
//! 排盘模块基准测试

#![cfg(feature = "runtime-benchmarks")]

use super::*;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;
use pallet::*;
use pallet_mingli_common::PillarInput;

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn create_chart() {
        let caller: T::AccountId = whitelisted_caller();

        #[extrinsic_call]
        _(
            RawOrigin::Signed(caller),
            None,
            PillarInput { gan: 0, zhi: 0 },
            PillarInput { gan: 2, zhi: 2 },
            PillarInput { gan: 4, zhi: 4 },
            8,
            23,
        );
    }

    #[benchmark]
    fn delete_chart() {
        let caller: T::AccountId = whitelisted_caller();
        assert!(Pallet::<T>::create_chart(
            RawOrigin::Signed(caller.clone()).into(),
            None,
            PillarInput { gan: 0, zhi: 0 },
            PillarInput { gan: 2, zhi: 2 },
            PillarInput { gan: 4, zhi: 4 },
            8,
            23,
        )
        .is_ok());

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), 0);
    }

    impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
