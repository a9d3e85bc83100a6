use super::*;

struct Failing;

impl ProfileProvider for Failing {
    fn fetch(&self, identifier: &str) -> anyhow::Result<ProfileStats> {
        anyhow::bail!("network unreachable for {identifier}")
    }
}

struct Slow {
    delay: Duration,
    stats: ProfileStats,
}

impl ProfileProvider for Slow {
    fn fetch(&self, _identifier: &str) -> anyhow::Result<ProfileStats> {
        std::thread::sleep(self.delay);
        Ok(self.stats.clone())
    }
}

fn custom_stats() -> ProfileStats {
    let mut s = ProfileStats::fallback();
    s.profile.login = "octocat".to_owned();
    s.overview.followers = 9000;
    s
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("statreel-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn failing_provider_resolves_to_fallback() {
    assert_eq!(fetch_or_fallback(&Failing, "ghost"), ProfileStats::fallback());
}

#[test]
fn static_provider_returns_its_record() {
    let p = StaticProvider::new(custom_stats());
    assert_eq!(p.fetch("anyone").unwrap().overview.followers, 9000);
}

#[test]
fn json_dir_provider_reads_user_documents() {
    let dir = scratch_dir("json-dir");
    std::fs::write(
        dir.join("octocat.json"),
        r#"{"login": "octocat", "name": "The Octocat", "followers": 12, "achievements": ["Pair Extraordinaire"]}"#,
    )
    .unwrap();

    let p = JsonDirProvider::new(&dir);
    let stats = p.fetch("octocat").unwrap();
    assert_eq!(stats.profile.name, "The Octocat");
    assert_eq!(stats.overview.followers, 12);
    assert_eq!(stats.achievements, vec!["Pair Extraordinaire".to_owned()]);
    assert_eq!(stats.activity, ProfileStats::fallback().activity);

    assert!(p.fetch("missing").is_err());
    assert!(p.fetch("../octocat").is_err());
}

#[test]
fn slot_serves_fallback_until_resolved() {
    let provider = Arc::new(Slow {
        delay: Duration::from_millis(200),
        stats: custom_stats(),
    });
    let slot = ProfileSlot::spawn(provider, "octocat");
    assert_eq!(slot.get_or_fallback(), &ProfileStats::fallback());

    assert!(slot.wait(Duration::from_secs(10)));
    assert!(slot.is_resolved());
    assert_eq!(slot.get_or_fallback().profile.login, "octocat");
}

#[test]
fn slot_with_failing_provider_settles_on_fallback() {
    let slot = ProfileSlot::spawn(Arc::new(Failing), "ghost");
    assert!(slot.wait(Duration::from_secs(10)));
    assert_eq!(slot.get_or_fallback(), &ProfileStats::fallback());
}

#[test]
fn ready_slot_is_resolved_immediately() {
    let slot = ProfileSlot::ready(custom_stats());
    assert!(slot.is_resolved());
    assert_eq!(slot.get_or_fallback().overview.followers, 9000);
}
