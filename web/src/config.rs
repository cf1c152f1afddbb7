//! Where forms submit to, and how the serving host decides that.

const LOOPBACK_HOSTS: &[&str] = &["localhost", "127.0.0.1", "::1", "[::1]"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Deployed,
}

/// The host and origin the page is served from.
///
/// Provided through Leptos context by `App`; anything that needs to know
/// whether it runs locally reads this instead of touching `window` itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteEnvironment {
    pub host: String,
    pub origin: String,
}

impl SiteEnvironment {
    pub fn new(host: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            origin: origin.into().trim_end_matches('/').to_string(),
        }
    }

    /// Reads `window.location` in the browser. The server has no page
    /// location, so it reports an empty, deployed environment.
    pub fn detect() -> Self {
        #[cfg(feature = "hydrate")]
        {
            if let Some(location) = web_sys::window().map(|window| window.location()) {
                let host = location.hostname().unwrap_or_default();
                let origin = location.origin().unwrap_or_default();
                return Self::new(host, origin);
            }
        }

        Self::default()
    }

    pub fn kind(&self) -> Environment {
        if LOOPBACK_HOSTS.contains(&self.host.as_str()) {
            Environment::Development
        } else {
            Environment::Deployed
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Talent,
    Brand,
    Community,
}

/// Per-form submission settings. Everything that differs between the
/// talent, brand and community forms is data in here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    pub kind: FormKind,
    pub submit_path: &'static str,
    /// Origin of the local API used when the site runs on a loopback host.
    pub dev_api_origin: &'static str,
    pub health_url: &'static str,
    pub fields: &'static [&'static str],
    pub required: &'static [&'static str],
    /// Shown when the backend accepts a submission without a message.
    pub success_fallback: &'static str,
    pub simulated_message: &'static str,
}

const LOCAL_HEALTH_URL: &str = "http://localhost:5001/health";
const SIMULATED_MESSAGE: &str =
    "Form submitted successfully! (Local simulation - would send email in production)";

pub const TALENT_FORM: FormConfig = FormConfig {
    kind: FormKind::Talent,
    submit_path: "/api/talent-submit",
    dev_api_origin: "http://localhost:5001",
    health_url: LOCAL_HEALTH_URL,
    fields: &[
        "fullName",
        "category",
        "city",
        "state",
        "email",
        "phone",
        "instagram",
        "website",
        "portfolio",
        "bio",
        "dateOfBirth",
    ],
    required: &["fullName", "category", "city", "state", "email", "phone", "bio"],
    success_fallback: "Thanks! Your talent profile has been submitted.",
    simulated_message: SIMULATED_MESSAGE,
};

pub const BRAND_FORM: FormConfig = FormConfig {
    kind: FormKind::Brand,
    submit_path: "/api/brand-submit",
    dev_api_origin: "http://localhost:5000",
    health_url: LOCAL_HEALTH_URL,
    fields: &[
        "brandName",
        "contactPerson",
        "email",
        "phone",
        "category",
        "website",
        "instagram",
        "collaborationInterest",
    ],
    required: &[
        "brandName",
        "contactPerson",
        "email",
        "phone",
        "category",
        "collaborationInterest",
    ],
    success_fallback: "Thanks! We'll be in touch about a partnership.",
    simulated_message: SIMULATED_MESSAGE,
};

pub const COMMUNITY_FORM: FormConfig = FormConfig {
    kind: FormKind::Community,
    submit_path: "/api/community-submit",
    dev_api_origin: "http://localhost:5001",
    health_url: LOCAL_HEALTH_URL,
    fields: &[
        "name",
        "ageGroup",
        "city",
        "state",
        "email",
        "phone",
        "username",
        "instagram",
        "interests",
        "notes",
    ],
    required: &[
        "name",
        "ageGroup",
        "city",
        "state",
        "email",
        "phone",
        "username",
        "instagram",
    ],
    success_fallback: "Welcome to the Fashion Nights community!",
    simulated_message: "Welcome to the Fashion Nights Community! Your profile has been created successfully. Check your email for confirmation.",
};

impl FormKind {
    pub fn config(self) -> &'static FormConfig {
        match self {
            FormKind::Talent => &TALENT_FORM,
            FormKind::Brand => &BRAND_FORM,
            FormKind::Community => &COMMUNITY_FORM,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormKind::Talent => "talent",
            FormKind::Brand => "brand",
            FormKind::Community => "community",
        }
    }
}

impl FormConfig {
    /// Absolute submission URL for the given serving environment.
    pub fn submit_url(&self, site: &SiteEnvironment) -> String {
        match site.kind() {
            Environment::Development => format!("{}{}", self.dev_api_origin, self.submit_path),
            Environment::Deployed => format!("{}{}", site.origin, self.submit_path),
        }
    }

    pub fn is_required(&self, field: &str) -> bool {
        self.required.contains(&field)
    }
}
