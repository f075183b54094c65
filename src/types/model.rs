//! Defines the `Model` enum, the closed registry of forecast products that
//! can be requested from the provider.

use crate::request::RequestError;
use std::fmt;
use std::str::FromStr;

/// A numerical weather-prediction product offered by SpotWx.
///
/// Each logical model maps to the provider's internal product code via
/// [`Model::code`]; that code is what goes into the `model` query parameter.
/// The two meteocode products additionally carry a bulletin title
/// ([`Model::title_code`]) which the provider requires as a separate `title`
/// parameter.
///
/// Parsing a model from its logical name rejects anything outside the
/// registry and reports the full accepted set:
///
/// ```
/// use spotwx::Model;
///
/// assert_eq!("gfs".parse::<Model>(), Ok(Model::Gfs));
/// assert!("ecmwf".parse::<Model>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    /// High Resolution Deterministic Prediction System, 1 km western domain.
    Hrdps,
    /// HRDPS continental domain.
    HrdpsContinental,
    /// Regional Deterministic Prediction System, 10 km.
    Rdps,
    /// Global Deterministic Prediction System, 15 km.
    Gdps,
    /// Global Ensemble Prediction System, 0.5 degree raw output.
    Geps,
    /// Rapid Refresh.
    Rap,
    /// North American Mesoscale forecast system.
    Nam,
    /// Short Range Ensemble Forecast.
    Sref,
    /// Global Forecast System.
    Gfs,
    /// GFS UV index product.
    GfsUvIndex,
    /// Short-range public forecast bulletin (FPVR14).
    ShortMeteocode,
    /// Extended public forecast bulletin (FPVR54).
    ExtMeteocode,
}

impl Model {
    /// Every supported model, in registry order.
    pub const ALL: [Model; 12] = [
        Model::Hrdps,
        Model::HrdpsContinental,
        Model::Rdps,
        Model::Gdps,
        Model::Geps,
        Model::Rap,
        Model::Nam,
        Model::Sref,
        Model::Gfs,
        Model::GfsUvIndex,
        Model::ShortMeteocode,
        Model::ExtMeteocode,
    ];

    /// The logical name accepted on the command line and in [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Model::Hrdps => "hrdps",
            Model::HrdpsContinental => "hrdps_continental",
            Model::Rdps => "rdps",
            Model::Gdps => "gdps",
            Model::Geps => "geps",
            Model::Rap => "rap",
            Model::Nam => "nam",
            Model::Sref => "sref",
            Model::Gfs => "gfs",
            Model::GfsUvIndex => "gfs_uv_index",
            Model::ShortMeteocode => "short_meteocode",
            Model::ExtMeteocode => "ext_meteocode",
        }
    }

    /// The provider's internal product code, used as the `model` query
    /// parameter.
    pub fn code(self) -> &'static str {
        match self {
            Model::Hrdps => "hrdps_1km_west",
            Model::HrdpsContinental => "hrdps_continental",
            Model::Rdps => "rdps_10km",
            Model::Gdps => "gem_glb_15km",
            Model::Geps => "geps_0p5_raw",
            Model::Rap => "rap_awp",
            Model::Nam => "nam_awphys",
            Model::Sref => "sref_pgrb",
            Model::Gfs => "gfs_pgrb2",
            Model::GfsUvIndex => "gfs_uv",
            Model::ShortMeteocode => "meteocode",
            Model::ExtMeteocode => "meteocode",
        }
    }

    /// The bulletin title the provider requires for meteocode products.
    ///
    /// `None` for every grib model; those requests carry no `title`
    /// parameter at all.
    pub fn title_code(self) -> Option<&'static str> {
        match self {
            Model::ShortMeteocode => Some("FPVR14"),
            Model::ExtMeteocode => Some("FPVR54"),
            _ => None,
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Model {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Model::ALL
            .into_iter()
            .find(|model| model.name() == s)
            .ok_or_else(|| RequestError::unknown_model(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_registry_name() {
        for model in Model::ALL {
            assert_eq!(model.name().parse::<Model>(), Ok(model));
        }
    }

    #[test]
    fn rejects_unknown_model_with_full_registry() {
        let err = "ecmwf".parse::<Model>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("ecmwf"));
        for model in Model::ALL {
            assert!(
                message.contains(model.name()),
                "expected registry listing to include {}",
                model.name()
            );
        }
    }

    #[test]
    fn meteocode_models_share_a_code_but_not_a_title() {
        assert_eq!(Model::ShortMeteocode.code(), "meteocode");
        assert_eq!(Model::ExtMeteocode.code(), "meteocode");
        assert_eq!(Model::ShortMeteocode.title_code(), Some("FPVR14"));
        assert_eq!(Model::ExtMeteocode.title_code(), Some("FPVR54"));
    }

    #[test]
    fn grib_models_have_no_title() {
        assert_eq!(Model::Gfs.title_code(), None);
        assert_eq!(Model::Hrdps.title_code(), None);
    }
}
