//! # 命理公共库
//!
//! 干支符号系统与纯计算引擎,供排盘与合婚两个 pallet 共用。
//!
//! 本 crate 不含任何存储或调度逻辑:
//! - `types`: 天干、地支、五行、十神等封闭枚举与值对象
//! - `constants`: 全部查表数据(藏干、十神表、十二运星表等)
//! - `calculations`: 四柱解析、十神、十二运星、神煞等纯函数
//! - `traits`: 跨 pallet 的命盘数据接口

#![cfg_attr(not(feature = "std"), no_std)]

pub mod calculations;
pub mod constants;
pub mod traits;
pub mod types;

pub use calculations::*;
pub use traits::*;
pub use types::*;
