//! 송변전 설비 신뢰도 참고 테이블.

use crate::form::SelectOption;

#[derive(Debug)]
pub struct Equipment {
    pub code: &'static str,
    pub name: &'static str,
    /// 고장률 ω [1/년]
    pub failure_rate_per_year: f64,
    /// 평균 복구 시간 t_v [h]
    pub repair_time_h: f64,
}

pub fn equipment() -> &'static [Equipment] {
    EQUIPMENT
}

pub fn find_equipment(key: &str) -> Option<&'static Equipment> {
    let key = key.trim();
    EQUIPMENT
        .iter()
        .find(|e| e.code.eq_ignore_ascii_case(key) || e.name.eq_ignore_ascii_case(key))
}

pub fn select_options() -> Vec<SelectOption> {
    EQUIPMENT
        .iter()
        .map(|e| SelectOption {
            value: e.code,
            label: e.name,
            group: "",
        })
        .collect()
}

static EQUIPMENT: &[Equipment] = &[
    Equipment {
        code: "pl-110",
        name: "Overhead line 110 kV",
        failure_rate_per_year: 0.007,
        repair_time_h: 10.0,
    },
    Equipment {
        code: "pl-35",
        name: "Overhead line 35 kV",
        failure_rate_per_year: 0.02,
        repair_time_h: 8.0,
    },
    Equipment {
        code: "t-110",
        name: "Transformer 110 kV",
        failure_rate_per_year: 0.015,
        repair_time_h: 100.0,
    },
    Equipment {
        code: "t-35",
        name: "Transformer 35 kV",
        failure_rate_per_year: 0.02,
        repair_time_h: 80.0,
    },
];
