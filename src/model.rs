use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

pub const GITHUB_BASE_URL: &str = "https://github.com";

/// Number of entries the generator keeps in `topActivelyUsedRepos`.
pub const TOP_REPOS_LIMIT: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubProfile {
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub profile_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub public_gists: u64,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizedRepo {
    pub author: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub language_color: Option<String>,
    #[serde(default)]
    pub stars: u64,
    #[serde(default)]
    pub forks: u64,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub pushed_at: Option<String>,
    #[serde(default)]
    pub activity_duration: Option<String>,
}

impl SanitizedRepo {
    pub fn slug(&self) -> String {
        format!("{}/{}", self.author, self.name)
    }

    pub fn url(&self) -> String {
        format!("{}/{}/{}", GITHUB_BASE_URL, self.author, self.name)
    }

    /// Description with empty strings treated as absent.
    pub fn description(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }

    /// Language with empty strings treated as absent.
    pub fn language(&self) -> Option<&str> {
        non_empty(self.language.as_deref())
    }

    pub fn same_repo(&self, other: &SanitizedRepo) -> bool {
        self.author == other.author && self.name == other.name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeekdayWeekendBreakdown {
    #[serde(default)]
    pub weekday: Option<f64>,
    #[serde(default)]
    pub weekend: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestCommit {
    pub date: String,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodMetrics {
    #[serde(default)]
    pub recent_contributions: u64,
    #[serde(default)]
    pub average_daily_commits: f64,
    #[serde(default)]
    pub weekend_percentage: f64,
    #[serde(default)]
    pub most_active_day: Option<String>,
    #[serde(default)]
    pub weekday_weekend_breakdown: Option<WeekdayWeekendBreakdown>,
    #[serde(default)]
    pub best_commit: Option<BestCommit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosedCount {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub closed: u64,
}

impl ClosedCount {
    pub fn open(&self) -> u64 {
        self.total.saturating_sub(self.closed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDetails {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub current_year: u64,
    #[serde(default)]
    pub current_streak: u64,
    #[serde(default)]
    pub longest_streak: u64,
    #[serde(default)]
    pub active_years: Vec<String>,
    #[serde(default)]
    pub year_over_year_change_percentage: Option<f64>,
    #[serde(default)]
    pub quarter_over_quarter_change_percentage: Option<f64>,
    #[serde(default)]
    pub half_over_half_change_percentage: Option<f64>,
    #[serde(default)]
    pub first_commit_date: Option<String>,
    #[serde(default)]
    pub coding_years: Option<String>,
    pub pull_requests: ClosedCount,
    pub issues: ClosedCount,
    #[serde(rename = "last6Months")]
    pub last_6_months: PeriodMetrics,
    #[serde(rename = "last1Year")]
    pub last_1_year: PeriodMetrics,
    pub overall: PeriodMetrics,
}

impl ContributionDetails {
    /// The three period windows paired with their display titles.
    pub fn windows(&self) -> [(&'static str, &PeriodMetrics); 3] {
        [
            ("Last 6 months", &self.last_6_months),
            ("Last 12 months", &self.last_1_year),
            ("Overall", &self.overall),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageDistribution {
    pub language: String,
    #[serde(default)]
    pub percentage: f64,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubData {
    pub profile: GitHubProfile,
    #[serde(default)]
    pub profile_url: Option<String>,
    pub contributions: ContributionDetails,
    #[serde(default)]
    pub sanitized_repos_data: Vec<SanitizedRepo>,
    #[serde(default)]
    pub language_distribution: Vec<LanguageDistribution>,
    #[serde(default)]
    pub total_stars: u64,
    #[serde(default)]
    pub best_repo: Option<SanitizedRepo>,
    #[serde(default)]
    pub most_active_repo_this_month: Option<SanitizedRepo>,
    #[serde(default)]
    pub actively_maintained_repos: Vec<SanitizedRepo>,
    #[serde(default)]
    pub top_actively_used_repos: Vec<SanitizedRepo>,
}

impl GitHubData {
    /// Top-level profile link, falling back to the one inside `profile`
    /// and finally to the canonical user URL.
    pub fn github_url(&self) -> String {
        non_empty(self.profile_url.as_deref())
            .or_else(|| non_empty(self.profile.profile_url.as_deref()))
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}/{}", GITHUB_BASE_URL, self.profile.username))
    }

    pub fn find_repo(&self, repo: &SanitizedRepo) -> Option<&SanitizedRepo> {
        self.sanitized_repos_data.iter().find(|r| r.same_repo(repo))
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOutput {
    pub version: u32,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub source: String,
    pub dashboard: crate::projection::Dashboard,
}
