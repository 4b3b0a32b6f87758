mod common;

use common::*;
use media_object::{
    AngleCommand, AudioChannelCommand, ChapterCommand, EngineNotification, EngineTrack, Interface,
    InterfaceCommand, InterfaceReply, MediaObject, NavigationCommand, NavigationMenu,
    SubtitleCommand, TitleCommand, TrackKind, TrackRegistry,
};

fn loaded_with_tracks() -> MediaObject<MockEngine> {
    let (mut media, events) = setup_with_probe(Some(FixedProbe::with(two_chapters())));
    media.engine_mut().audio = vec![EngineTrack::titled("English"), EngineTrack::titled("German")];
    media.engine_mut().subtitles = vec![EngineTrack::default()];
    load(&mut media, &events, local("/media/film.mkv"));
    media
}

fn audio(command: AudioChannelCommand) -> InterfaceCommand {
    InterfaceCommand::AudioChannel(command)
}

fn subtitle(command: SubtitleCommand) -> InterfaceCommand {
    InterfaceCommand::Subtitle(command)
}

#[test]
fn test_every_interface_is_supported() {
    let (media, _events) = setup_media_object();
    for interface in [
        Interface::Navigation,
        Interface::Chapter,
        Interface::Angle,
        Interface::Title,
        Interface::Subtitle,
        Interface::AudioChannel,
    ] {
        assert!(media.has_interface(interface));
    }
}

#[test]
fn test_available_audio_channels() {
    let mut media = loaded_with_tracks();

    match media.interface_call(audio(AudioChannelCommand::AvailableAudioChannels)) {
        InterfaceReply::Tracks(tracks) => {
            let names: Vec<_> = tracks.iter().map(|t| t.name.as_str()).collect();
            assert_eq!(names, vec!["English", "German"]);
            assert!(tracks.iter().all(|t| t.owner == media.id()));
        }
        other => panic!("unexpected reply {:?}", other),
    }
}

#[test]
fn test_select_own_audio_channel() {
    let mut media = loaded_with_tracks();
    let german = media.registry().list_for(media.id(), TrackKind::Audio)[1].clone();

    let reply = media.interface_call(audio(AudioChannelCommand::SetCurrentAudioChannel(
        german.global_id,
    )));

    assert_eq!(reply, InterfaceReply::Accepted(true));
    assert_eq!(media.engine().calls.last(), Some(&EngineCall::SetAudioTrack(1)));
    assert_eq!(
        media.interface_call(audio(AudioChannelCommand::CurrentAudioChannel)),
        InterfaceReply::Track(Some(german))
    );
}

#[test]
fn test_current_audio_channel_none_selected() {
    let mut media = loaded_with_tracks();
    assert_eq!(
        media.interface_call(audio(AudioChannelCommand::CurrentAudioChannel)),
        InterfaceReply::Track(None)
    );
}

#[test]
fn test_foreign_track_is_refused() {
    let registry = TrackRegistry::new();
    let mut first = MediaObject::new(MockEngine::default(), registry.clone()).with_prober(None);
    let mut second = MediaObject::new(MockEngine::default(), registry.clone()).with_prober(None);
    for media in [&mut first, &mut second] {
        media.engine_mut().audio = vec![EngineTrack::titled("English")];
        media.set_source(local("/media/a.mkv")).unwrap();
        media.handle_notification(status(media_object::EngineStatus::Loaded));
    }
    let foreign = registry.list_for(second.id(), TrackKind::Audio)[0].global_id;
    let calls_before = first.engine().calls.len();

    let reply = first.interface_call(audio(AudioChannelCommand::SetCurrentAudioChannel(foreign)));

    assert_eq!(reply, InterfaceReply::Accepted(false));
    assert_eq!(first.engine().calls.len(), calls_before);
    assert_eq!(first.engine().active_audio, None);
}

#[test]
fn test_stale_track_is_refused() {
    let mut media = loaded_with_tracks();
    let stale = media.registry().list_for(media.id(), TrackKind::Audio)[0].global_id;
    media.handle_notification(EngineNotification::TracksChanged);

    let reply = media.interface_call(audio(AudioChannelCommand::SetCurrentAudioChannel(stale)));
    assert_eq!(reply, InterfaceReply::Accepted(false));
}

#[test]
fn test_subtitle_id_is_not_an_audio_channel() {
    let mut media = loaded_with_tracks();
    let sub = media.registry().list_for(media.id(), TrackKind::Subtitle)[0].global_id;

    let reply = media.interface_call(audio(AudioChannelCommand::SetCurrentAudioChannel(sub)));
    assert_eq!(reply, InterfaceReply::Accepted(false));

    let reply = media.interface_call(subtitle(SubtitleCommand::SetCurrentSubtitle(sub)));
    assert_eq!(reply, InterfaceReply::Accepted(true));
    assert_eq!(media.engine().calls.last(), Some(&EngineCall::SetSubtitleTrack(0)));
}

#[test]
fn test_subtitle_queries() {
    let mut media = loaded_with_tracks();

    match media.interface_call(subtitle(SubtitleCommand::AvailableSubtitles)) {
        InterfaceReply::Tracks(tracks) => {
            assert_eq!(tracks.len(), 1);
            assert_eq!(tracks[0].name, "Subtitle 1");
        }
        other => panic!("unexpected reply {:?}", other),
    }
    assert_eq!(
        media.interface_call(subtitle(SubtitleCommand::SubtitleEncoding)),
        InterfaceReply::Text("UTF".to_string())
    );
    assert_eq!(
        media.interface_call(subtitle(SubtitleCommand::SubtitleFont)),
        InterfaceReply::Text("default".to_string())
    );
    assert_eq!(
        media.interface_call(subtitle(SubtitleCommand::SetSubtitleFont("Sans".to_string()))),
        InterfaceReply::Accepted(true)
    );
    assert_eq!(
        media.interface_call(subtitle(SubtitleCommand::SetCurrentSubtitleFile(
            "/media/film.srt".into()
        ))),
        InterfaceReply::Accepted(true)
    );
}

#[test]
fn test_chapter_interface() {
    let mut media = loaded_with_tracks();

    assert_eq!(
        media.interface_call(InterfaceCommand::Chapter(ChapterCommand::AvailableChapters)),
        InterfaceReply::Count(2)
    );
    assert_eq!(
        media.interface_call(InterfaceCommand::Chapter(ChapterCommand::SetChapter(1))),
        InterfaceReply::Accepted(true)
    );
    assert_eq!(media.engine().calls.last(), Some(&EngineCall::SetPosition(60_000)));

    media.handle_notification(position(60_500));
    assert_eq!(
        media.interface_call(InterfaceCommand::Chapter(ChapterCommand::Chapter)),
        InterfaceReply::Index(1)
    );

    assert_eq!(
        media.interface_call(InterfaceCommand::Chapter(ChapterCommand::SetChapter(9))),
        InterfaceReply::Accepted(false)
    );
}

#[test]
fn test_fixed_titles_and_angles() {
    let (mut media, _events) = setup_media_object();

    let replies = [
        (InterfaceCommand::Title(TitleCommand::AvailableTitles), InterfaceReply::Count(1)),
        (InterfaceCommand::Title(TitleCommand::Title), InterfaceReply::Index(1)),
        (InterfaceCommand::Title(TitleCommand::AutoplayTitles), InterfaceReply::Flag(false)),
        (InterfaceCommand::Title(TitleCommand::SetTitle(3)), InterfaceReply::Accepted(true)),
        (InterfaceCommand::Angle(AngleCommand::AvailableAngles), InterfaceReply::Count(1)),
        (InterfaceCommand::Angle(AngleCommand::Angle), InterfaceReply::Index(0)),
        (InterfaceCommand::Angle(AngleCommand::SetAngle(2)), InterfaceReply::Accepted(true)),
    ];
    for (command, expected) in replies {
        assert_eq!(media.interface_call(command), expected);
    }
    assert!(media.engine().calls.is_empty());
}

#[test]
fn test_navigation_is_accepted() {
    let (mut media, _events) = setup_media_object();
    assert_eq!(
        media.interface_call(InterfaceCommand::Navigation(NavigationCommand::SetMenu(
            NavigationMenu::RootMenu
        ))),
        InterfaceReply::Accepted(true)
    );
    assert_eq!(
        media.interface_call(InterfaceCommand::Navigation(NavigationCommand::AvailableMenus)),
        InterfaceReply::Menus(Vec::new())
    );
}
