use serde::{Deserialize, Serialize};

/// Everything the scene needs to know about one GitHub account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileStats {
    /// Identity fields shown in the header card.
    pub profile: Profile,
    /// Headline counters.
    pub overview: Overview,
    /// Commits per month, oldest first.
    pub activity: Vec<MonthActivity>,
    /// Language shares in percent, largest first.
    pub languages: Vec<LanguageShare>,
    /// Achievement badge titles.
    pub achievements: Vec<String>,
}

/// Identity fields of a profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Account login.
    pub login: String,
    /// Free-form location.
    pub location: String,
    /// Short biography.
    pub bio: String,
    /// Company or organization.
    pub company: String,
}

/// Headline counters of a profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overview {
    /// Number of public repositories.
    pub public_repos: u64,
    /// Follower count.
    pub followers: u64,
    /// Following count.
    pub following: u64,
    /// Account creation timestamp (RFC 3339).
    pub created_at: String,
}

/// Commit count for one month.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthActivity {
    /// Short month label.
    pub month: String,
    /// Commits in that month.
    pub commits: u64,
}

/// Share of one language across the account's code.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LanguageShare {
    /// Language name.
    pub name: String,
    /// Percentage in `[0, 100]`.
    pub percentage: f64,
}

impl ProfileStats {
    /// Static record rendered whenever live data is missing or failed to load.
    pub fn fallback() -> Self {
        let activity = [
            ("Jan", 87),
            ("Feb", 124),
            ("Mar", 156),
            ("Apr", 98),
            ("May", 142),
            ("Jun", 178),
        ]
        .into_iter()
        .map(|(month, commits)| MonthActivity {
            month: month.to_owned(),
            commits,
        })
        .collect();

        let languages = [
            ("JavaScript", 40.0),
            ("TypeScript", 25.0),
            ("Python", 15.0),
            ("HTML", 12.0),
            ("CSS", 8.0),
        ]
        .into_iter()
        .map(|(name, percentage)| LanguageShare {
            name: name.to_owned(),
            percentage,
        })
        .collect();

        Self {
            profile: Profile {
                name: "Ashraf Morningstar".to_owned(),
                login: "AshrafMorningstar".to_owned(),
                location: "India".to_owned(),
                bio: "Full-stack developer crafting cyber-clean experiences".to_owned(),
                company: "MORNINGSTARCONSTRUCTION".to_owned(),
            },
            overview: Overview {
                public_repos: 46,
                followers: 3,
                following: 3,
                created_at: "2020-12-23T11:59:27Z".to_owned(),
            },
            activity,
            languages,
            achievements: vec![
                "Open Source Explorer".to_owned(),
                "Persistent Committer".to_owned(),
                "Full-Stack Developer".to_owned(),
            ],
        }
    }

    /// Per-month bar weights: `commits / max(commits)`, all zero when there is no activity.
    pub fn activity_weights(&self) -> Vec<f64> {
        let max = self
            .activity
            .iter()
            .map(|m| m.commits)
            .max()
            .unwrap_or(0)
            .max(1) as f64;
        self.activity
            .iter()
            .map(|m| m.commits as f64 / max)
            .collect()
    }

    /// Per-language `(share, offset)` pairs: `percentage / 100` and the sum of preceding shares.
    pub fn language_segments(&self) -> Vec<(f64, f64)> {
        let mut offset = 0.0;
        self.languages
            .iter()
            .map(|l| {
                let share = l.percentage / 100.0;
                let seg = (share, offset);
                offset += share;
                seg
            })
            .collect()
    }
}

/// Profile document as returned by the GitHub users API, optionally extended with the derived
/// activity, language and achievement lists.
///
/// Every field is optional; missing ones are filled from [`ProfileStats::fallback`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UserRecord {
    /// Display name.
    pub name: Option<String>,
    /// Account login.
    pub login: Option<String>,
    /// Location.
    pub location: Option<String>,
    /// Biography.
    pub bio: Option<String>,
    /// Company.
    pub company: Option<String>,
    /// Public repository count.
    pub public_repos: Option<u64>,
    /// Follower count.
    pub followers: Option<u64>,
    /// Following count.
    pub following: Option<u64>,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// Commits per month.
    pub activity: Option<Vec<MonthActivity>>,
    /// Language shares.
    pub languages: Option<Vec<LanguageShare>>,
    /// Achievement titles.
    pub achievements: Option<Vec<String>>,
}

impl UserRecord {
    /// Merge onto the fallback record, field by field.
    pub fn into_stats(self) -> ProfileStats {
        let fb = ProfileStats::fallback();
        ProfileStats {
            profile: Profile {
                name: self.name.unwrap_or(fb.profile.name),
                login: self.login.unwrap_or(fb.profile.login),
                location: self.location.unwrap_or(fb.profile.location),
                bio: self.bio.unwrap_or(fb.profile.bio),
                company: self.company.unwrap_or(fb.profile.company),
            },
            overview: Overview {
                public_repos: self.public_repos.unwrap_or(fb.overview.public_repos),
                followers: self.followers.unwrap_or(fb.overview.followers),
                following: self.following.unwrap_or(fb.overview.following),
                created_at: self.created_at.unwrap_or(fb.overview.created_at),
            },
            activity: self.activity.unwrap_or(fb.activity),
            languages: self.languages.unwrap_or(fb.languages),
            achievements: self.achievements.unwrap_or(fb.achievements),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/profile.rs"]
mod tests;
