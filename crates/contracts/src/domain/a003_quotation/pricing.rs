//! Формулы расчёта трудозатрат на проектирование и пусконаладку AGV-трассы
//!
//! Функции возвращают «сырые» часы; округление вверх делает вызывающая
//! сторона ([`estimate_fee`]).

use super::config::PricingConfig;
use serde::{Deserialize, Serialize};

/// Числовые параметры трассы из шапки формы
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelParams {
    /// Длина трассы, м
    pub distance: f64,
    pub intersections: f64,
    pub stations: f64,
    pub vehicles: f64,
    /// Не участвует в формулах, хранится для полноты параметров
    pub equipment: f64,
    /// Не участвует в формулах, хранится для полноты параметров
    pub difficulty: f64,
}

/// Часы проектирования: (машины×перекрёстки×2 + станции + длина/100) × запас
pub fn calc_design_hours(params: &TravelParams, config: &PricingConfig) -> f64 {
    let base = params.vehicles * params.intersections * 2.0
        + params.stations
        + params.distance / 100.0;
    base * config.safety_factor
}

/// Количество наладчиков на объекте
pub fn setup_workers(vehicles: f64, distance: f64) -> u32 {
    if vehicles <= 1.0 && distance <= 50.0 {
        1
    } else if (2.0..=5.0).contains(&vehicles) && distance <= 100.0 {
        2
    } else {
        3
    }
}

/// Часы пусконаладки
///
/// Время цикла = длина/скорость + 0.1×станции; прогонов 10 на машину;
/// на исправление ошибок по часу на прогон; блокировки:
/// 0.1×машины×перекрёстки×станции. Сумма × запас × наладчики.
pub fn calc_setup_hours(params: &TravelParams, config: &PricingConfig) -> f64 {
    let cycle_minutes = params.distance / config.vehicle_speed_m_per_min + 0.1 * params.stations;

    let trials = 10.0 * params.vehicles;
    let trial_hours = cycle_minutes * trials / 60.0;
    let bug_fix_hours = trials;
    let interlock_hours = 0.1 * params.vehicles * params.intersections * params.stations;

    let base = trial_hours + bug_fix_hours + interlock_hours;
    let workers = setup_workers(params.vehicles, params.distance);

    base * config.safety_factor * f64::from(workers)
}

/// Рентабельность в процентах: (продажа − себестоимость) / продажа × 100
pub fn profit_rate_percent(sell: f64, cost: f64) -> f64 {
    if sell <= 0.0 {
        return 0.0;
    }
    (sell - cost) / sell * 100.0
}

/// Сумма скидки, округлённая до целого; 0 если скидки или суммы нет
pub fn discount_amount(total_sell: f64, rate_percent: f64) -> f64 {
    if rate_percent > 0.0 && total_sell > 0.0 {
        (total_sell * (rate_percent / 100.0)).round()
    } else {
        0.0
    }
}

/// Оценка одного вида работ после округления часов
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeEstimate {
    pub hours: f64,
    pub cost: f64,
    pub fee: f64,
    pub profit_rate: f64,
}

pub fn estimate_fee(raw_hours: f64, labor_rate: f64, sell_rate: f64) -> FeeEstimate {
    let hours = raw_hours.ceil();
    let cost = hours * labor_rate;
    let fee = hours * sell_rate;
    FeeEstimate {
        hours,
        cost,
        fee,
        profit_rate: profit_rate_percent(fee, cost),
    }
}

pub fn estimate_design(params: &TravelParams, config: &PricingConfig) -> FeeEstimate {
    estimate_fee(
        calc_design_hours(params, config),
        config.labor_rate,
        config.design_sell_rate,
    )
}

pub fn estimate_setup(params: &TravelParams, config: &PricingConfig) -> FeeEstimate {
    estimate_fee(
        calc_setup_hours(params, config),
        config.labor_rate,
        config.setup_sell_rate,
    )
}
