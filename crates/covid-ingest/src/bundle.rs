//! Named bundle: one optional table per logical dataset name.

use std::collections::BTreeMap;

use polars::prelude::DataFrame;

use crate::registry::DATASET_REGISTRY;

/// Every registry dataset by logical name; `None` when it was not loaded.
#[derive(Debug, Clone, Default)]
pub struct CovidData {
    pub seoul: Option<DataFrame>,
    pub timeage: Option<DataFrame>,
    pub searchtrend: Option<DataFrame>,
    pub time_province: Option<DataFrame>,
    pub weather: Option<DataFrame>,
    pub patientinfo: Option<DataFrame>,
    pub region: Option<DataFrame>,
    pub timegender: Option<DataFrame>,
    pub policy: Option<DataFrame>,
    pub case: Option<DataFrame>,
    pub time: Option<DataFrame>,
}

impl CovidData {
    /// Builds the bundle from tables keyed by logical name.
    ///
    /// Names that are not bundle fields are ignored.
    pub fn from_loaded(mut loaded: BTreeMap<&str, DataFrame>) -> Self {
        Self {
            seoul: loaded.remove("seoul"),
            timeage: loaded.remove("timeage"),
            searchtrend: loaded.remove("searchtrend"),
            time_province: loaded.remove("time_province"),
            weather: loaded.remove("weather"),
            patientinfo: loaded.remove("patientinfo"),
            region: loaded.remove("region"),
            timegender: loaded.remove("timegender"),
            policy: loaded.remove("policy"),
            case: loaded.remove("case"),
            time: loaded.remove("time"),
        }
    }

    fn slot(&self, var_name: &str) -> Option<&Option<DataFrame>> {
        let slot = match var_name {
            "seoul" => &self.seoul,
            "timeage" => &self.timeage,
            "searchtrend" => &self.searchtrend,
            "time_province" => &self.time_province,
            "weather" => &self.weather,
            "patientinfo" => &self.patientinfo,
            "region" => &self.region,
            "timegender" => &self.timegender,
            "policy" => &self.policy,
            "case" => &self.case,
            "time" => &self.time,
            _ => return None,
        };
        Some(slot)
    }

    /// Returns the table for a logical name, if it was loaded.
    pub fn get(&self, var_name: &str) -> Option<&DataFrame> {
        self.slot(var_name).and_then(Option::as_ref)
    }

    /// True if `var_name` is one of the bundle's fields.
    pub fn has_field(&self, var_name: &str) -> bool {
        self.slot(var_name).is_some()
    }

    /// All fields in registry order, with `None` for absent tables.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, Option<&DataFrame>)> + '_ {
        DATASET_REGISTRY
            .iter()
            .map(move |spec| (spec.var_name, self.get(spec.var_name)))
    }

    pub fn loaded_count(&self) -> usize {
        self.entries().filter(|(_, df)| df.is_some()).count()
    }

    /// Copies every loaded table into a scope owned by the caller, keyed by
    /// logical name. Returns the number of tables bound.
    pub fn bind_into<E>(&self, scope: &mut E) -> usize
    where
        E: Extend<(String, DataFrame)>,
    {
        let bound: Vec<(String, DataFrame)> = self
            .entries()
            .filter_map(|(name, df)| df.map(|df| (name.to_string(), df.clone())))
            .collect();
        let count = bound.len();
        scope.extend(bound);
        count
    }
}
