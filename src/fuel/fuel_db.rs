//! 배출량 계산용 연료 물성 테이블.
//! 값은 교재 참고치이며 실제 연료 분석값으로 대체해야 한다.

use crate::form::SelectOption;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuelKind {
    Coal,
    FuelOil,
    Gas,
}

impl FuelKind {
    pub fn label(self) -> &'static str {
        match self {
            FuelKind::Coal => "Coal",
            FuelKind::FuelOil => "Fuel oil",
            FuelKind::Gas => "Natural gas",
        }
    }
}

#[derive(Debug)]
pub struct FuelData {
    pub code: &'static str,
    pub name: &'static str,
    pub kind: FuelKind,
    /// 회분 A [%]
    pub ash_pct: f64,
    /// 수분 W [%]
    pub moisture_pct: f64,
    /// 저위 발열량 [MJ/kg], 가스는 [MJ/Nm³]
    pub heating_value_mj: f64,
    /// 가스 밀도 [kg/Nm³]. 고체/액체 연료는 None.
    pub density_kg_per_nm3: Option<f64>,
}

impl FuelData {
    const fn solid(
        code: &'static str,
        name: &'static str,
        kind: FuelKind,
        ash_pct: f64,
        moisture_pct: f64,
        heating_value_mj: f64,
    ) -> Self {
        Self {
            code,
            name,
            kind,
            ash_pct,
            moisture_pct,
            heating_value_mj,
            density_kg_per_nm3: None,
        }
    }

    const fn gas(code: &'static str, name: &'static str, heating_value_mj: f64, density: f64) -> Self {
        Self {
            code,
            name,
            kind: FuelKind::Gas,
            ash_pct: 0.0,
            moisture_pct: 0.0,
            heating_value_mj,
            density_kg_per_nm3: Some(density),
        }
    }
}

pub fn fuels() -> &'static [FuelData] {
    FUELS
}

/// 코드 또는 표시 이름으로 연료를 찾는다. 대소문자는 구분하지 않는다.
pub fn find_fuel(key: &str) -> Option<&'static FuelData> {
    let key = key.trim();
    FUELS
        .iter()
        .find(|f| f.code.eq_ignore_ascii_case(key) || f.name.eq_ignore_ascii_case(key))
}

pub fn select_options() -> Vec<SelectOption> {
    FUELS
        .iter()
        .map(|f| SelectOption {
            value: f.code,
            label: f.name,
            group: f.kind.label(),
        })
        .collect()
}

static FUELS: &[FuelData] = &[
    FuelData::solid("ash", "Anthracite culm (ASh)", FuelKind::Coal, 5.0, 3.0, 33.24),
    FuelData::solid("tr", "Lean coal (TR)", FuelKind::Coal, 12.0, 6.0, 34.29),
    FuelData::solid("gr-donetsk", "Donetsk gas coal (GR)", FuelKind::Coal, 25.2, 10.0, 31.98),
    FuelData::solid("dr-donetsk", "Donetsk long-flame coal (DR)", FuelKind::Coal, 35.0, 15.0, 30.56),
    FuelData::solid("gr-lviv-volyn", "Lviv-Volyn gas coal (GR)", FuelKind::Coal, 18.0, 10.0, 31.69),
    FuelData::solid("bir", "Oleksandriia brown coal (BIR)", FuelKind::Coal, 45.0, 25.0, 26.96),
    FuelData::solid("hs-40", "High-sulfur fuel oil 40", FuelKind::FuelOil, 0.15, 2.0, 40.40),
    FuelData::solid("hs-100", "High-sulfur fuel oil 100", FuelKind::FuelOil, 0.15, 2.0, 40.03),
    FuelData::solid("hs-200", "High-sulfur fuel oil 200", FuelKind::FuelOil, 0.30, 1.0, 39.77),
    FuelData::solid("ls-40", "Low-sulfur fuel oil 40", FuelKind::FuelOil, 0.15, 2.0, 41.24),
    FuelData::solid("ls-100", "Low-sulfur fuel oil 100", FuelKind::FuelOil, 0.15, 2.0, 40.82),
    FuelData::gas("urengoy-uzhhorod", "Urengoy-Uzhhorod pipeline gas", 33.08, 0.723),
    FuelData::gas("central-asia", "Central Asia-Center pipeline gas", 34.21, 0.764),
];
