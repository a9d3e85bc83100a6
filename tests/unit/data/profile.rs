use super::*;

#[test]
fn fallback_matches_published_numbers() {
    let fb = ProfileStats::fallback();
    assert_eq!(fb.profile.login, "AshrafMorningstar");
    assert_eq!(fb.overview.public_repos, 46);
    assert_eq!(fb.activity.len(), 6);
    assert_eq!(fb.activity[5].commits, 178);
    let total: f64 = fb.languages.iter().map(|l| l.percentage).sum();
    assert_eq!(total, 100.0);
    assert_eq!(fb.achievements.len(), 3);
}

#[test]
fn activity_weights_are_relative_to_busiest_month() {
    let fb = ProfileStats::fallback();
    let w = fb.activity_weights();
    assert_eq!(w[5], 1.0);
    assert!((w[0] - 87.0 / 178.0).abs() < 1e-12);

    let empty = ProfileStats {
        activity: vec![MonthActivity {
            month: "Jan".to_owned(),
            commits: 0,
        }],
        ..fb
    };
    assert_eq!(empty.activity_weights(), vec![0.0]);
}

#[test]
fn language_segments_accumulate_offsets() {
    let segs = ProfileStats::fallback().language_segments();
    assert_eq!(segs[0], (0.4, 0.0));
    assert_eq!(segs[1].1, 0.4);
    assert!((segs[4].1 - 0.92).abs() < 1e-12);
}

#[test]
fn partial_user_record_fills_from_fallback() {
    let rec: UserRecord = serde_json::from_str(
        r#"{"login": "octocat", "public_repos": 8, "bio": null, "site_admin": false}"#,
    )
    .unwrap();
    let stats = rec.into_stats();
    assert_eq!(stats.profile.login, "octocat");
    assert_eq!(stats.overview.public_repos, 8);
    assert_eq!(stats.overview.followers, 3);
    assert_eq!(
        stats.profile.bio,
        ProfileStats::fallback().profile.bio
    );
    assert_eq!(stats.languages, ProfileStats::fallback().languages);
}
