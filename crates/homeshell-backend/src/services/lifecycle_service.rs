use homeshell_bridge::MessageFromBackend;

/// Arms home readiness once the main window becomes visible.
pub async fn handle_main_window_visibility(context: super::AppContextHandle, visible: bool) {
    let mut state = context.state.write().await;
    if state.readiness.is_ready() {
        return;
    }
    state.readiness.main_window_visibility_changed(visible);
}

/// Sends the home-ready event on the first frame after the main window became
/// visible.
pub async fn handle_frame_swapped(context: super::AppContextHandle) {
    let ready = context.state.write().await.readiness.frame_swapped();
    if ready {
        log::info!("Home screen is ready");
        context.send(MessageFromBackend::HomeReady).await;
    }
}

/// Tears the backend state down: announces the teardown, then stops every
/// effect still bound to a notification.
pub async fn handle_shutdown(context: super::AppContextHandle) {
    context.send(MessageFromBackend::AboutToDestroy).await;

    let stopped = context.state.write().await.dispatcher.stop_all();
    log::info!("Shutting down, stopped {stopped} feedback effect(s)");
}
