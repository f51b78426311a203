//! Signal predicates and the feature catalogue.
//!
//! Every feature of the vector is produced by one signal. Signals return a
//! [`SignalValue`]: `1` benign, `0` neutral, `-1` suspicious.
//!
//! - [`lexical`]: pure checks on the URL string and hostname
//! - [`placeholder`]: constant signals standing in for page-content and ranking analysis
//! - [`external`]: WHOIS, DNS and HTTP backed signals with pessimistic fallbacks

pub mod external;
pub mod lexical;
pub mod placeholder;

use serde::Serialize;
use strum_macros::EnumIter;

use crate::domain::NormalizedUrl;

/// Number of features in a vector.
pub const FEATURE_COUNT: usize = 30;

/// Value of a single signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SignalValue(i8);

impl SignalValue {
    /// Evidence of phishing
    pub const SUSPICIOUS: SignalValue = SignalValue(-1);
    /// No evidence either way
    pub const NEUTRAL: SignalValue = SignalValue(0);
    /// Evidence of legitimacy
    pub const BENIGN: SignalValue = SignalValue(1);

    /// `SUSPICIOUS` when `condition` holds, `BENIGN` otherwise.
    pub fn suspicious_if(condition: bool) -> Self {
        if condition {
            Self::SUSPICIOUS
        } else {
            Self::BENIGN
        }
    }

    /// `BENIGN` when `condition` holds, `SUSPICIOUS` otherwise.
    pub fn benign_if(condition: bool) -> Self {
        Self::suspicious_if(!condition)
    }

    /// The raw value.
    pub fn value(self) -> i8 {
        self.0
    }
}

impl From<SignalValue> for i8 {
    fn from(v: SignalValue) -> Self {
        v.0
    }
}

/// A signal computed from the normalized URL alone.
///
/// Lexical and placeholder signals share this shape, so a real implementation
/// can replace a placeholder without touching the assembler.
pub type UrlSignal = fn(&NormalizedUrl) -> SignalValue;

/// The features of the vector, in model column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum Feature {
    HavingIpAddress,
    UrlLength,
    ShorteningService,
    HavingAtSymbol,
    DoubleSlashRedirecting,
    PrefixSuffix,
    HavingSubDomain,
    SslFinalState,
    DomainRegistrationLength,
    Favicon,
    Port,
    HttpsToken,
    RequestUrl,
    UrlOfAnchor,
    LinksInTags,
    Sfh,
    SubmittingToEmail,
    AbnormalUrl,
    Redirect,
    OnMouseover,
    RightClick,
    PopUpWindow,
    Iframe,
    AgeOfDomain,
    DnsRecord,
    WebTraffic,
    PageRank,
    GoogleIndex,
    LinksPointingToPage,
    StatisticalReport,
}

impl Feature {
    /// Column name expected by the downstream model.
    ///
    /// The misspellings are part of the model's schema.
    pub fn name(self) -> &'static str {
        match self {
            Feature::HavingIpAddress => "having_IP_Address",
            Feature::UrlLength => "URL_Length",
            Feature::ShorteningService => "Shortining_Service",
            Feature::HavingAtSymbol => "having_At_Symbol",
            Feature::DoubleSlashRedirecting => "double_slash_redirecting",
            Feature::PrefixSuffix => "Prefix_Suffix",
            Feature::HavingSubDomain => "having_Sub_Domain",
            Feature::SslFinalState => "SSLfinal_State",
            Feature::DomainRegistrationLength => "Domain_registeration_length",
            Feature::Favicon => "Favicon",
            Feature::Port => "port",
            Feature::HttpsToken => "HTTPS_token",
            Feature::RequestUrl => "Request_URL",
            Feature::UrlOfAnchor => "URL_of_Anchor",
            Feature::LinksInTags => "Links_in_tags",
            Feature::Sfh => "SFH",
            Feature::SubmittingToEmail => "Submitting_to_email",
            Feature::AbnormalUrl => "Abnormal_URL",
            Feature::Redirect => "Redirect",
            Feature::OnMouseover => "on_mouseover",
            Feature::RightClick => "RightClick",
            Feature::PopUpWindow => "popUpWidnow",
            Feature::Iframe => "Iframe",
            Feature::AgeOfDomain => "age_of_domain",
            Feature::DnsRecord => "DNSRecord",
            Feature::WebTraffic => "web_traffic",
            Feature::PageRank => "Page_Rank",
            Feature::GoogleIndex => "Google_Index",
            Feature::LinksPointingToPage => "Links_pointing_to_page",
            Feature::StatisticalReport => "Statistical_report",
        }
    }

    /// Position of the feature in the vector.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The URL-only signal for this feature, or `None` for features that need
    /// a WHOIS, DNS or HTTP lookup.
    pub fn url_signal(self) -> Option<UrlSignal> {
        let signal: UrlSignal = match self {
            Feature::HavingIpAddress => lexical::having_ip_address,
            Feature::UrlLength => lexical::url_length,
            Feature::ShorteningService => lexical::shortening_service,
            Feature::HavingAtSymbol => lexical::having_at_symbol,
            Feature::DoubleSlashRedirecting => lexical::double_slash_redirecting,
            Feature::PrefixSuffix => lexical::prefix_suffix,
            Feature::HavingSubDomain => lexical::having_sub_domain,
            Feature::SslFinalState => lexical::ssl_final_state,
            Feature::Port => external::port,
            Feature::HttpsToken => lexical::https_token,
            Feature::RequestUrl => lexical::request_url,
            Feature::UrlOfAnchor => placeholder::url_of_anchor,
            Feature::LinksInTags => placeholder::links_in_tags,
            Feature::Sfh => placeholder::sfh,
            Feature::SubmittingToEmail => lexical::submitting_to_email,
            Feature::AbnormalUrl => lexical::abnormal_url,
            Feature::OnMouseover => placeholder::on_mouseover,
            Feature::RightClick => placeholder::right_click,
            Feature::PopUpWindow => placeholder::pop_up_window,
            Feature::Iframe => placeholder::iframe,
            Feature::WebTraffic => external::web_traffic,
            Feature::PageRank => placeholder::page_rank,
            Feature::GoogleIndex => placeholder::google_index,
            Feature::LinksPointingToPage => placeholder::links_pointing_to_page,
            Feature::StatisticalReport => placeholder::statistical_report,
            Feature::DomainRegistrationLength
            | Feature::Favicon
            | Feature::Redirect
            | Feature::AgeOfDomain
            | Feature::DnsRecord => return None,
        };
        Some(signal)
    }
}
