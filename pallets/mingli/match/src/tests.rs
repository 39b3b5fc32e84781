//! # 合婚模块单元测试

use crate::{hehun, mock::*, Error, Event, Reports, Requests};
use frame_support::{assert_noop, assert_ok};
use pallet_mingli_common::{ChartProvider, MatchRecommendation, MatchStatus, PillarInput};

/// 账户 1 建甲寅/丙午/甲子/壬子盘,账户 2 建己丑/庚申/乙未/癸丑盘
fn setup_charts() -> (u64, u64) {
    assert_ok!(MingliChart::create_chart(
        RuntimeOrigin::signed(1),
        None,
        PillarInput { gan: 0, zhi: 2 },
        PillarInput { gan: 2, zhi: 6 },
        PillarInput { gan: 0, zhi: 0 },
        8,
        23,
    ));
    assert_ok!(MingliChart::create_chart(
        RuntimeOrigin::signed(2),
        None,
        PillarInput { gan: 5, zhi: 1 },
        PillarInput { gan: 6, zhi: 8 },
        PillarInput { gan: 1, zhi: 7 },
        9,
        1,
    ));
    (0, 1)
}

fn setup_authorized_request() -> u64 {
    let (chart_a, chart_b) = setup_charts();
    assert_ok!(MingliMatch::create_request(
        RuntimeOrigin::signed(1),
        2,
        chart_a,
        chart_b
    ));
    assert_ok!(MingliMatch::authorize_request(RuntimeOrigin::signed(2), 0));
    0
}

#[test]
fn create_request_works() {
    new_test_ext().execute_with(|| {
        let (chart_a, chart_b) = setup_charts();

        assert_ok!(MingliMatch::create_request(
            RuntimeOrigin::signed(1),
            2,
            chart_a,
            chart_b
        ));

        let request = Requests::<Test>::get(0).unwrap();
        assert_eq!(request.party_a, 1);
        assert_eq!(request.party_b, 2);
        assert_eq!(request.status, MatchStatus::PendingAuthorization);
        assert_eq!(MingliMatch::user_requests_as_party_a(1).to_vec(), vec![0]);
        assert_eq!(MingliMatch::user_requests_as_party_b(2).to_vec(), vec![0]);

        System::assert_last_event(
            Event::RequestCreated {
                request_id: 0,
                party_a: 1,
                party_b: 2,
            }
            .into(),
        );
    });
}

#[test]
fn create_request_validations() {
    new_test_ext().execute_with(|| {
        let (chart_a, chart_b) = setup_charts();

        assert_noop!(
            MingliMatch::create_request(RuntimeOrigin::signed(1), 1, chart_a, chart_b),
            Error::<Test>::CannotMatchSelf
        );

        // 甲方必须持有自己提交的命盘
        assert_noop!(
            MingliMatch::create_request(RuntimeOrigin::signed(1), 2, chart_b, chart_a),
            Error::<Test>::NotChartOwner
        );

        assert_noop!(
            MingliMatch::create_request(RuntimeOrigin::signed(1), 2, chart_a, 99),
            Error::<Test>::ChartNotFound
        );
    });
}

#[test]
fn create_request_enforces_user_limit() {
    new_test_ext().execute_with(|| {
        let (chart_a, chart_b) = setup_charts();

        for _ in 0..4 {
            assert_ok!(MingliMatch::create_request(
                RuntimeOrigin::signed(1),
                2,
                chart_a,
                chart_b
            ));
        }

        assert_noop!(
            MingliMatch::create_request(RuntimeOrigin::signed(1), 2, chart_a, chart_b),
            Error::<Test>::TooManyRequests
        );
    });
}

#[test]
fn authorize_request_works() {
    new_test_ext().execute_with(|| {
        let (chart_a, chart_b) = setup_charts();
        assert_ok!(MingliMatch::create_request(
            RuntimeOrigin::signed(1),
            2,
            chart_a,
            chart_b
        ));

        // 只有乙方可以授权
        assert_noop!(
            MingliMatch::authorize_request(RuntimeOrigin::signed(3), 0),
            Error::<Test>::NotAuthorized
        );

        assert_ok!(MingliMatch::authorize_request(RuntimeOrigin::signed(2), 0));

        let request = Requests::<Test>::get(0).unwrap();
        assert_eq!(request.status, MatchStatus::Authorized);
        assert_eq!(request.authorized_at, Some(1));

        // 不能重复授权
        assert_noop!(
            MingliMatch::authorize_request(RuntimeOrigin::signed(2), 0),
            Error::<Test>::InvalidRequestStatus
        );
    });
}

#[test]
fn authorize_request_rejects_expired() {
    new_test_ext().execute_with(|| {
        let (chart_a, chart_b) = setup_charts();
        assert_ok!(MingliMatch::create_request(
            RuntimeOrigin::signed(1),
            2,
            chart_a,
            chart_b
        ));

        System::set_block_number(1 + 101);

        assert_noop!(
            MingliMatch::authorize_request(RuntimeOrigin::signed(2), 0),
            Error::<Test>::RequestExpired
        );
    });
}

#[test]
fn reject_and_cancel_flows() {
    new_test_ext().execute_with(|| {
        let (chart_a, chart_b) = setup_charts();
        assert_ok!(MingliMatch::create_request(
            RuntimeOrigin::signed(1),
            2,
            chart_a,
            chart_b
        ));
        assert_ok!(MingliMatch::create_request(
            RuntimeOrigin::signed(1),
            2,
            chart_a,
            chart_b
        ));

        // 乙方拒绝
        assert_ok!(MingliMatch::reject_request(RuntimeOrigin::signed(2), 0));
        assert_eq!(
            Requests::<Test>::get(0).unwrap().status,
            MatchStatus::Rejected
        );

        // 甲方取消,乙方无权取消
        assert_noop!(
            MingliMatch::cancel_request(RuntimeOrigin::signed(2), 1),
            Error::<Test>::NotAuthorized
        );
        assert_ok!(MingliMatch::cancel_request(RuntimeOrigin::signed(1), 1));
        assert_eq!(
            Requests::<Test>::get(1).unwrap().status,
            MatchStatus::Cancelled
        );

        // 已终止的请求不能再变更
        assert_noop!(
            MingliMatch::cancel_request(RuntimeOrigin::signed(1), 0),
            Error::<Test>::InvalidRequestStatus
        );
        assert_noop!(
            MingliMatch::reject_request(RuntimeOrigin::signed(2), 1),
            Error::<Test>::InvalidRequestStatus
        );
    });
}

#[test]
fn generate_report_works() {
    new_test_ext().execute_with(|| {
        let request_id = setup_authorized_request();

        assert_ok!(MingliMatch::generate_report(
            RuntimeOrigin::signed(1),
            request_id
        ));

        let report = Reports::<Test>::get(request_id).unwrap();
        assert_eq!(report.request_id, request_id);
        assert_eq!(report.algorithm_version, 1);
        assert!(report.score.overall <= 100);
        assert_eq!(
            report.recommendation,
            MatchRecommendation::from_score(report.score.overall)
        );

        // 报告与引擎直接计算一致
        let sizhu_a = <MingliChart as ChartProvider<u64>>::get_sizhu(0).unwrap();
        let sizhu_b = <MingliChart as ChartProvider<u64>>::get_sizhu(1).unwrap();
        assert_eq!(report.score, hehun::calculate_hehun_score(&sizhu_a, &sizhu_b));
        // 调换双方分数不变
        assert_eq!(report.score, hehun::calculate_hehun_score(&sizhu_b, &sizhu_a));

        assert_eq!(
            Requests::<Test>::get(request_id).unwrap().status,
            MatchStatus::Completed
        );

        System::assert_last_event(
            Event::ReportGenerated {
                report_id: request_id,
                request_id,
                overall_score: report.score.overall,
                recommendation: report.recommendation,
            }
            .into(),
        );
    });
}

#[test]
fn generate_report_validations() {
    new_test_ext().execute_with(|| {
        let (chart_a, chart_b) = setup_charts();
        assert_ok!(MingliMatch::create_request(
            RuntimeOrigin::signed(1),
            2,
            chart_a,
            chart_b
        ));

        // 未授权不能生成
        assert_noop!(
            MingliMatch::generate_report(RuntimeOrigin::signed(1), 0),
            Error::<Test>::InvalidRequestStatus
        );

        assert_ok!(MingliMatch::authorize_request(RuntimeOrigin::signed(2), 0));

        // 第三方无权生成
        assert_noop!(
            MingliMatch::generate_report(RuntimeOrigin::signed(3), 0),
            Error::<Test>::NotAuthorized
        );

        assert_ok!(MingliMatch::generate_report(RuntimeOrigin::signed(2), 0));

        // 请求已完成,不能重复生成
        assert_noop!(
            MingliMatch::generate_report(RuntimeOrigin::signed(1), 0),
            Error::<Test>::InvalidRequestStatus
        );

        assert_noop!(
            MingliMatch::generate_report(RuntimeOrigin::signed(1), 99),
            Error::<Test>::RequestNotFound
        );
    });
}
