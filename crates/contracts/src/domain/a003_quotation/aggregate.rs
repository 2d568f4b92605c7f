use super::pricing::TravelParams;
use crate::shared::lenient;
use crate::shared::number::parse_number;
use serde::{Deserialize, Serialize};

/// Метка строки «設計費» (стоимость проектирования по параметрам трассы)
pub const DESIGN_FEE_LABEL: &str = "設計費（パラメータ）";

/// Метка строки «現地セットアップ» (пусконаладка по параметрам трассы)
pub const SETUP_FEE_LABEL: &str = "現地セットアップ（パラメータ）";

/// Вид служебной строки, которую сервер добавляет в смету сам
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedFeeLine {
    Design,
    Setup,
}

impl FixedFeeLine {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            DESIGN_FEE_LABEL => Some(Self::Design),
            SETUP_FEE_LABEL => Some(Self::Setup),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Design => DESIGN_FEE_LABEL,
            Self::Setup => SETUP_FEE_LABEL,
        }
    }
}

/// Значения шапки сметы (блок `initial-values-json`)
///
/// Поля хранятся как текст ввода: сервер присылает то строки, то числа.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QuotationValues {
    #[serde(deserialize_with = "lenient::string")]
    pub company_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub contact_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub project_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub delivery_date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub delivery_terms: String,
    #[serde(deserialize_with = "lenient::string")]
    pub payment_terms: String,
    #[serde(deserialize_with = "lenient::string")]
    pub valid_until: String,
    #[serde(deserialize_with = "lenient::string")]
    pub remarks: String,
    #[serde(deserialize_with = "lenient::string")]
    pub estimator_name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub customer_id: String,

    // Параметры трассы AGV
    #[serde(deserialize_with = "lenient::string")]
    pub distance_m: String,
    #[serde(deserialize_with = "lenient::string")]
    pub intersection_count: String,
    #[serde(deserialize_with = "lenient::string")]
    pub station_count: String,
    #[serde(deserialize_with = "lenient::string")]
    pub vehicle_count: String,
    #[serde(deserialize_with = "lenient::string")]
    pub equipment_count: String,
    #[serde(deserialize_with = "lenient::string")]
    pub circuit_difficulty: String,

    /// Скидка в процентах
    #[serde(deserialize_with = "lenient::string")]
    pub discount_rate: String,
}

impl QuotationValues {
    pub fn travel_params(&self) -> TravelParams {
        TravelParams {
            distance: parse_number(&self.distance_m),
            intersections: parse_number(&self.intersection_count),
            stations: parse_number(&self.station_count),
            vehicles: parse_number(&self.vehicle_count),
            equipment: parse_number(&self.equipment_count),
            difficulty: parse_number(&self.circuit_difficulty),
        }
    }

    pub fn discount_rate_percent(&self) -> f64 {
        parse_number(&self.discount_rate)
    }
}

/// Поле шапки, которое редактируется обычным `<input>`
///
/// `name()` совпадает и с `id` элемента, и с именем поля в POST.
/// `company_name` и `customer_id` сюда не входят: у них своя логика привязки клиента.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuotationField {
    ContactName,
    ProjectName,
    DeliveryDate,
    DeliveryTerms,
    PaymentTerms,
    ValidUntil,
    EstimatorName,
    Remarks,
    DistanceM,
    IntersectionCount,
    StationCount,
    VehicleCount,
    EquipmentCount,
    CircuitDifficulty,
    DiscountRate,
}

impl QuotationField {
    pub const HEADER: [QuotationField; 8] = [
        Self::ProjectName,
        Self::ContactName,
        Self::EstimatorName,
        Self::DeliveryDate,
        Self::DeliveryTerms,
        Self::PaymentTerms,
        Self::ValidUntil,
        Self::Remarks,
    ];

    /// Поля, от которых зависит расчёт трудозатрат
    pub const TRAVEL: [QuotationField; 6] = [
        Self::DistanceM,
        Self::IntersectionCount,
        Self::StationCount,
        Self::VehicleCount,
        Self::EquipmentCount,
        Self::CircuitDifficulty,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::ContactName => "contact_name",
            Self::ProjectName => "project_name",
            Self::DeliveryDate => "delivery_date",
            Self::DeliveryTerms => "delivery_terms",
            Self::PaymentTerms => "payment_terms",
            Self::ValidUntil => "valid_until",
            Self::EstimatorName => "estimator_name",
            Self::Remarks => "remarks",
            Self::DistanceM => "distance_m",
            Self::IntersectionCount => "intersection_count",
            Self::StationCount => "station_count",
            Self::VehicleCount => "vehicle_count",
            Self::EquipmentCount => "equipment_count",
            Self::CircuitDifficulty => "circuit_difficulty",
            Self::DiscountRate => "discount_rate",
        }
    }

    pub fn is_numeric(&self) -> bool {
        Self::TRAVEL.contains(self) || *self == Self::DiscountRate
    }

    pub fn value<'a>(&self, values: &'a QuotationValues) -> &'a str {
        match self {
            Self::ContactName => values.contact_name.as_str(),
            Self::ProjectName => values.project_name.as_str(),
            Self::DeliveryDate => values.delivery_date.as_str(),
            Self::DeliveryTerms => values.delivery_terms.as_str(),
            Self::PaymentTerms => values.payment_terms.as_str(),
            Self::ValidUntil => values.valid_until.as_str(),
            Self::EstimatorName => values.estimator_name.as_str(),
            Self::Remarks => values.remarks.as_str(),
            Self::DistanceM => values.distance_m.as_str(),
            Self::IntersectionCount => values.intersection_count.as_str(),
            Self::StationCount => values.station_count.as_str(),
            Self::VehicleCount => values.vehicle_count.as_str(),
            Self::EquipmentCount => values.equipment_count.as_str(),
            Self::CircuitDifficulty => values.circuit_difficulty.as_str(),
            Self::DiscountRate => values.discount_rate.as_str(),
        }
    }

    pub fn value_mut<'a>(&self, values: &'a mut QuotationValues) -> &'a mut String {
        match self {
            Self::ContactName => &mut values.contact_name,
            Self::ProjectName => &mut values.project_name,
            Self::DeliveryDate => &mut values.delivery_date,
            Self::DeliveryTerms => &mut values.delivery_terms,
            Self::PaymentTerms => &mut values.payment_terms,
            Self::ValidUntil => &mut values.valid_until,
            Self::EstimatorName => &mut values.estimator_name,
            Self::Remarks => &mut values.remarks,
            Self::DistanceM => &mut values.distance_m,
            Self::IntersectionCount => &mut values.intersection_count,
            Self::StationCount => &mut values.station_count,
            Self::VehicleCount => &mut values.vehicle_count,
            Self::EquipmentCount => &mut values.equipment_count,
            Self::CircuitDifficulty => &mut values.circuit_difficulty,
            Self::DiscountRate => &mut values.discount_rate,
        }
    }
}

/// Сохранённая строка сметы (элемент блока `initial-details-json`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QuotationDetail {
    #[serde(deserialize_with = "lenient::opt_string")]
    pub product_id: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub label: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub code: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub price: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub quantity: Option<String>,
    #[serde(deserialize_with = "lenient::opt_string")]
    pub subtotal: Option<String>,
}

impl QuotationDetail {
    pub fn fixed_fee(&self) -> Option<FixedFeeLine> {
        self.label.as_deref().and_then(FixedFeeLine::from_label)
    }

    /// Ненулевой `product_id` после обрезки пробелов
    pub fn linked_product_id(&self) -> Option<&str> {
        let pid = self.product_id.as_deref()?.trim();
        if pid.is_empty() || pid == "0" {
            None
        } else {
            Some(pid)
        }
    }
}
