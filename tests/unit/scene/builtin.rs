use super::*;
use crate::foundation::core::FrameIndex;

#[test]
fn builtin_scene_validates() {
    let scene = SceneDef::github_stats();
    scene.validate().unwrap();
    assert_eq!(scene.duration_frames, 600);
    assert_eq!(scene.fps.as_f64(), 30.0);
}

#[test]
fn cards_start_on_the_published_schedule() {
    let scene = SceneDef::github_stats();
    let starts: Vec<(String, u64)> = scene
        .cards
        .iter()
        .map(|c| (c.id.clone(), scene.card_start(c).0))
        .collect();
    let expect = [
        ("background", 0),
        ("header", 0),
        ("profile", 15),
        ("overview", 30),
        ("activity", 60),
        ("languages", 90),
        ("achievements", 120),
        ("footer", 150),
    ];
    assert_eq!(starts.len(), expect.len());
    for ((id, start), (eid, estart)) in starts.iter().zip(expect) {
        assert_eq!(id, eid);
        assert_eq!(*start, estart, "{id}");
    }
    assert_eq!(scene.card_start(&scene.cards[2]), FrameIndex(15));
}

#[test]
fn builtin_scene_survives_json() {
    let scene = SceneDef::github_stats();
    let text = serde_json::to_string_pretty(&scene).unwrap();
    let back = SceneDef::from_reader(text.as_bytes()).unwrap();
    assert_eq!(back, scene);
    back.validate().unwrap();
}

#[test]
fn legend_waits_thirty_frames_after_its_card() {
    let scene = SceneDef::github_stats();
    let languages = scene.cards.iter().find(|c| c.id == "languages").unwrap();
    let legend = languages.groups.iter().find(|g| g.id == "legend").unwrap();
    assert_eq!(legend.stagger.delay(0), 30);
    assert_eq!(legend.stagger.delay(2), 46);
}
