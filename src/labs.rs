//! 제공하는 계산기 목록. 슬러그로 JSON/폼 진입점을 찾는다.

use crate::calc::{self, Calculator};
use crate::error::CalcError;
use crate::form::FormFields;
use crate::fuel::{CompositionCalculator, EmissionCalculator, FuelOilCalculator};
use crate::grid::{CableCalculator, LoadCalculator, ShortCircuitCalculator};
use crate::reliability::{LossesCalculator, OutageCalculator};
use crate::solar::SolarProfitCalculator;
use crate::web::page;

/// 계산기 하나의 타입 소거된 진입점.
#[derive(Debug)]
pub struct Lab {
    pub slug: &'static str,
    pub title: &'static str,
    pub run_json: fn(&[u8]) -> Result<Vec<u8>, CalcError>,
    pub blank_page: fn() -> String,
    /// 폼 제출 처리. 두 번째 인자가 true면 결과 조각만 렌더링한다.
    pub submit: fn(&FormFields, bool) -> String,
}

const fn lab<C: Calculator>() -> Lab {
    Lab {
        slug: C::SLUG,
        title: C::TITLE,
        run_json: calc::run_json::<C>,
        blank_page: page::blank::<C>,
        submit: page::submit::<C>,
    }
}

static LABS: [Lab; 9] = [
    lab::<CompositionCalculator>(),
    lab::<FuelOilCalculator>(),
    lab::<SolarProfitCalculator>(),
    lab::<EmissionCalculator>(),
    lab::<CableCalculator>(),
    lab::<ShortCircuitCalculator>(),
    lab::<OutageCalculator>(),
    lab::<LossesCalculator>(),
    lab::<LoadCalculator>(),
];

pub fn all() -> &'static [Lab] {
    &LABS
}

pub fn find(slug: &str) -> Option<&'static Lab> {
    LABS.iter().find(|lab| lab.slug == slug)
}
