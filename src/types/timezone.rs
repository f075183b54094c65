//! The allow-list of time zones the provider accepts for forecast hours.

use crate::request::RequestError;
use std::fmt;
use std::str::FromStr;

/// A time zone supported by the provider for localizing forecast hours.
///
/// The provider only serves the Canadian zones below; [`FromStr`] rejects
/// anything else and reports the full allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timezone {
    Vancouver,
    Edmonton,
    Regina,
    Winnipeg,
    Toronto,
    Montreal,
    StJohns,
    Halifax,
    GooseBay,
    Whitehorse,
    Yellowknife,
    RankinInlet,
    Iqaluit,
    CambridgeBay,
    CoralHarbour,
}

impl Timezone {
    /// Every supported zone, in allow-list order.
    pub const ALL: [Timezone; 15] = [
        Timezone::Vancouver,
        Timezone::Edmonton,
        Timezone::Regina,
        Timezone::Winnipeg,
        Timezone::Toronto,
        Timezone::Montreal,
        Timezone::StJohns,
        Timezone::Halifax,
        Timezone::GooseBay,
        Timezone::Whitehorse,
        Timezone::Yellowknife,
        Timezone::RankinInlet,
        Timezone::Iqaluit,
        Timezone::CambridgeBay,
        Timezone::CoralHarbour,
    ];

    /// The IANA zone name, used as the `tz` query parameter.
    pub fn name(self) -> &'static str {
        match self {
            Timezone::Vancouver => "America/Vancouver",
            Timezone::Edmonton => "America/Edmonton",
            Timezone::Regina => "America/Regina",
            Timezone::Winnipeg => "America/Winnipeg",
            Timezone::Toronto => "America/Toronto",
            Timezone::Montreal => "America/Montreal",
            Timezone::StJohns => "America/St_Johns",
            Timezone::Halifax => "America/Halifax",
            Timezone::GooseBay => "America/Goose_Bay",
            Timezone::Whitehorse => "America/Whitehorse",
            Timezone::Yellowknife => "America/Yellowknife",
            Timezone::RankinInlet => "America/Rankin_Inlet",
            Timezone::Iqaluit => "America/Iqaluit",
            Timezone::CambridgeBay => "America/Cambridge_Bay",
            Timezone::CoralHarbour => "America/Coral_Harbour",
        }
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Timezone {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timezone::ALL
            .into_iter()
            .find(|zone| zone.name() == s)
            .ok_or_else(|| RequestError::unknown_timezone(s))
    }
}
