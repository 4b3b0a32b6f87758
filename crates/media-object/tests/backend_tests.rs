mod common;

use common::*;
use media_object::{Backend, EngineStatus, EngineTrack, TrackKind};
use mediabridge_config::Config;

fn backend() -> Backend {
    let mut config = Config::default();
    config.probe.enabled = false;
    Backend::new(config)
}

#[test]
fn test_objects_share_one_id_space() {
    let backend = backend();
    let mut first = backend.create_media_object(MockEngine::default());
    let mut second = backend.create_media_object(MockEngine::default());

    for media in [&mut first, &mut second] {
        media.engine_mut().audio = vec![EngineTrack::titled("English")];
        media.set_source(local("/media/a.mkv")).unwrap();
        media.handle_notification(status(EngineStatus::Loaded));
    }

    let ids = backend.object_description_indexes(TrackKind::Audio);
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);

    let props = backend
        .object_description_properties(TrackKind::Audio, ids[1])
        .unwrap();
    assert_eq!(props["name"], "English");
}

#[test]
fn test_dropped_object_leaves_registry() {
    let backend = backend();
    let mut kept = backend.create_media_object(MockEngine::default());
    let mut gone = backend.create_media_object(MockEngine::default());
    kept.engine_mut().subtitles = vec![EngineTrack::default()];
    gone.engine_mut().subtitles = vec![EngineTrack::default()];
    for media in [&mut kept, &mut gone] {
        media.set_source(local("/media/a.mkv")).unwrap();
        media.handle_notification(status(EngineStatus::Loaded));
    }
    let gone_id = backend.registry().list_for(gone.id(), TrackKind::Subtitle)[0].global_id;

    drop(gone);

    let ids = backend.object_description_indexes(TrackKind::Subtitle);
    assert_eq!(ids.len(), 1);
    assert!(!ids.contains(&gone_id));
    assert!(backend
        .object_description_properties(TrackKind::Subtitle, gone_id)
        .is_err());
}

#[test]
fn test_objects_take_config_settings() {
    let mut config = Config::default();
    config.player.tick_interval_ms = 250;
    config.player.prefinish_mark_ms = 4_000;
    config.player.transition_time_ms = -1_500;
    let backend = Backend::new(config);

    let media = backend.create_media_object(MockEngine::default());
    assert_eq!(media.tick_interval(), 250);
    assert_eq!(media.prefinish_mark(), 4_000);
    assert_eq!(media.transition_time(), -1_500);
    assert_eq!(backend.config().player.tick_interval_ms, 250);
}
