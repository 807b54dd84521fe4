use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use tempfile::NamedTempFile;
use visdomwave_lib::{load_config, wire_services};
use vw_core::carousel::{AutoplayStatus, CarouselEvent, CarouselPreset, InteractionKind};
use vw_infra::TracingCollector;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[tokio::test(start_paused = true)]
async fn configured_patents_carousel_stops_on_last_window() {
    let file = config_file(
        r#"
        [carousel.patents]
        interval_ms = 1000
        transition_ms = 0
        loop_enabled = false
    "#,
    );
    let config = load_config(file.path()).unwrap();
    let services = wire_services(&config, Arc::new(TracingCollector)).unwrap();
    let (handle, _task) = services.spawn_carousel(CarouselPreset::Patents).unwrap();

    let mut updates = handle.subscribe();
    handle
        .send(CarouselEvent::Mount {
            item_count: 7,
            viewport_width: 1400,
        })
        .await
        .unwrap();
    updates.wait_for(|state| state.mounted).await.unwrap();
    assert_eq!(handle.state().items_per_view, 3);

    tokio::time::sleep(Duration::from_millis(1001)).await;
    assert_eq!(handle.state().start, 3);

    tokio::time::sleep(Duration::from_millis(1000)).await;
    let state = handle.state();
    assert_eq!(state.start, 4);
    assert_eq!(state.status, AutoplayStatus::Finished);

    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert_eq!(handle.state().start, 4);
}

#[tokio::test(start_paused = true)]
async fn values_carousel_ignores_hover() {
    let services =
        wire_services(&vw_core::AppConfig::default(), Arc::new(TracingCollector)).unwrap();
    let (handle, _task) = services.spawn_carousel(CarouselPreset::Values).unwrap();

    let mut updates = handle.subscribe();
    handle
        .send(CarouselEvent::Mount {
            item_count: 4,
            viewport_width: 800,
        })
        .await
        .unwrap();
    updates.wait_for(|state| state.mounted).await.unwrap();
    handle
        .send(CarouselEvent::InteractionStarted(InteractionKind::Hover))
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(3001)).await;

    let state = handle.state();
    assert_eq!(state.status, AutoplayStatus::Running);
    assert_eq!(state.start, 1);
}

#[tokio::test(start_paused = true)]
async fn resize_reclamps_window() {
    let file = config_file(
        r#"
        [carousel.curriculum]
        autoplay = false
    "#,
    );
    let config = load_config(file.path()).unwrap();
    let services = wire_services(&config, Arc::new(TracingCollector)).unwrap();
    let (handle, _task) = services.spawn_carousel(CarouselPreset::Curriculum).unwrap();

    let mut updates = handle.subscribe();
    handle
        .send(CarouselEvent::Mount {
            item_count: 8,
            viewport_width: 320,
        })
        .await
        .unwrap();
    handle
        .send(CarouselEvent::Navigate(vw_core::carousel::Navigation::GoTo(7)))
        .await
        .unwrap();
    updates.wait_for(|state| state.start == 7).await.unwrap();

    handle
        .send(CarouselEvent::Resize {
            viewport_width: 1300,
        })
        .await
        .unwrap();
    let state = updates
        .wait_for(|state| state.items_per_view == 4)
        .await
        .unwrap()
        .clone();

    assert_eq!(state.start, 4);
    assert_eq!(state.status, AutoplayStatus::Idle);
}
