use serde::{Deserialize, Serialize};

/// Ставки и коэффициенты расчёта трудозатрат
///
/// Значения по умолчанию встроены; страница может переопределить любую
/// часть через блок `pricing-config-json`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Себестоимость часа работы
    pub labor_rate: f64,

    /// Цена продажи часа проектирования
    #[serde(alias = "design_rate")]
    pub design_sell_rate: f64,

    /// Цена продажи часа пусконаладки
    #[serde(alias = "setup_rate")]
    pub setup_sell_rate: f64,

    /// Коэффициент запаса, применяемый к обоим видам работ
    pub safety_factor: f64,

    /// Скорость AGV, м/мин
    pub vehicle_speed_m_per_min: f64,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: PricingConfig = PricingConfig {
    labor_rate: 7920.0,
    design_sell_rate: 15000.0,
    setup_sell_rate: 15000.0,
    safety_factor: 1.1,
    vehicle_speed_m_per_min: 30.0,
};

impl Default for PricingConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

impl PricingConfig {
    /// Заменить нечисловые и неположительные значения на встроенные
    ///
    /// Нулевая скорость или коэффициент дали бы `NaN`/`inf` в предпросмотре.
    pub fn sanitized(self) -> Self {
        fn check(name: &str, value: f64, default: f64) -> f64 {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                log::warn!(
                    "pricing config: invalid {} = {}, using default {}",
                    name,
                    value,
                    default
                );
                default
            }
        }

        Self {
            labor_rate: check("labor_rate", self.labor_rate, DEFAULT_CONFIG.labor_rate),
            design_sell_rate: check(
                "design_sell_rate",
                self.design_sell_rate,
                DEFAULT_CONFIG.design_sell_rate,
            ),
            setup_sell_rate: check(
                "setup_sell_rate",
                self.setup_sell_rate,
                DEFAULT_CONFIG.setup_sell_rate,
            ),
            safety_factor: check("safety_factor", self.safety_factor, DEFAULT_CONFIG.safety_factor),
            vehicle_speed_m_per_min: check(
                "vehicle_speed_m_per_min",
                self.vehicle_speed_m_per_min,
                DEFAULT_CONFIG.vehicle_speed_m_per_min,
            ),
        }
    }
}
