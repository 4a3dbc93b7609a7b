//! Beverage record model.
//!
//! A shelf slot holds a sugared beverage, a mineral water, or the empty
//! sentinel. Pure domain values; no IO.

pub mod beverage;

pub use beverage::{
    BeverageInfo, BeverageKind, BeverageRecord, MineralWater, PROMOTION_DISCOUNT, SugaredBeverage,
};
