use std::time::Duration;

use client_core::{
    on_press, on_release, LayoutConfig, ReconcileOutcome, RenderReconciler, SnapshotHandle,
    WidgetRegistry,
};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::protocol::ElevatorSnapshot;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{err_label, UiError, UiErrorContext, UiEvent};
use crate::controller::orchestration::BackendQueue;
use crate::ui::paint::{paint_frame, Canvas};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct PointerInput {
    pressed: bool,
    released: bool,
    toggle_debug: bool,
}

/// Owns everything the frame loop touches: the widget set, the snapshot reader and the
/// outbound command queue.
pub struct ElevatorViewApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    snapshots: SnapshotHandle,
    layout: LayoutConfig,
    registry: WidgetRegistry,
    reconciler: RenderReconciler,
    show_debug: bool,
    info: Option<String>,
    banner: Option<UiError>,
}

impl ElevatorViewApp {
    pub fn new(
        layout: LayoutConfig,
        registry: WidgetRegistry,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        snapshots: SnapshotHandle,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            snapshots,
            layout,
            registry,
            reconciler: RenderReconciler::new(),
            show_debug: false,
            info: None,
            banner: None,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    tracing::debug!(%message, "backend info");
                    self.info = Some(message);
                }
                UiEvent::Error(err) => {
                    tracing::warn!(
                        context = ?err.context(),
                        message = err.message(),
                        "backend error"
                    );
                    self.banner = Some(err);
                }
            }
        }
    }

    fn handle_pointer(
        &mut self,
        input: PointerInput,
        pos: Option<egui::Pos2>,
        origin: egui::Pos2,
    ) {
        if input.toggle_debug {
            self.show_debug = !self.show_debug;
        }
        let Some(pos) = pos else {
            return;
        };
        let local = pos - origin;
        let mut status = String::new();
        let mut emitted = 0;
        {
            let mut queue = BackendQueue::new(&self.cmd_tx, &mut status);
            if input.pressed {
                emitted += on_press(&self.registry, local.x, local.y, &mut queue);
            }
            if input.released {
                emitted += on_release(&self.registry, local.x, local.y, &mut queue);
            }
        }
        if !status.is_empty() {
            self.banner = Some(UiError::from_message(UiErrorContext::CommandQueue, status));
        } else if emitted > 0 && self.banner.take().is_some() {
            tracing::debug!("command queue accepting again; clearing status banner");
        }
    }

    fn debug_overlay(&self, snapshot: Option<&ElevatorSnapshot>) -> Option<String> {
        if !self.show_debug {
            return None;
        }
        let counts = self.snapshots.counts();
        let body = match snapshot {
            Some(snapshot) => serde_json::to_string_pretty(snapshot)
                .unwrap_or_else(|err| format!("<unserialisable snapshot: {err}>")),
            None => "no snapshot received".to_string(),
        };
        Some(format!(
            "polls accepted: {}  failed: {} ({} in a row)\n{body}",
            counts.accepted, counts.failed, counts.consecutive_failures
        ))
    }

    fn status_line(&self) -> Option<String> {
        match (&self.banner, &self.info) {
            (Some(err), _) => Some(format!("{}: {}", err_label(err.category()), err.message())),
            (None, Some(info)) => Some(info.clone()),
            (None, None) => None,
        }
    }
}

impl eframe::App for ElevatorViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let (input, pointer_pos) = ctx.input(|i| {
            (
                PointerInput {
                    pressed: i.pointer.primary_pressed(),
                    released: i.pointer.primary_released(),
                    toggle_debug: i.key_pressed(egui::Key::D),
                },
                i.pointer.latest_pos(),
            )
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click());
                let origin = response.rect.min;

                self.handle_pointer(input, pointer_pos, origin);

                let snapshot = self.snapshots.current();
                let outcome = self
                    .reconciler
                    .reconcile(&mut self.registry, snapshot.as_deref());
                let drawn = match outcome {
                    ReconcileOutcome::Applied => snapshot.as_deref(),
                    ReconcileOutcome::Absent => None,
                };

                let overlay = self.debug_overlay(drawn);
                let status = match outcome {
                    ReconcileOutcome::Absent => Some("Waiting for elevator state...".to_string()),
                    ReconcileOutcome::Applied => self.status_line(),
                };
                paint_frame(
                    &Canvas::new(&painter, origin),
                    &self.layout,
                    &self.registry,
                    drawn,
                    overlay.as_deref(),
                    status.as_deref(),
                );
            });

        ctx.request_repaint_after(FRAME_INTERVAL);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use client_core::{ClientError, ElevatorAuthority, StateSynchronizer};
    use crossbeam_channel::bounded;
    use shared::domain::{ButtonCommand, ButtonKind};

    use super::*;

    struct NeverAuthority;

    #[async_trait]
    impl ElevatorAuthority for NeverAuthority {
        async fn fetch_snapshot(&self) -> Result<ElevatorSnapshot, ClientError> {
            Ok(ElevatorSnapshot::idle(4))
        }

        async fn send_button(&self, _command: ButtonCommand) -> Result<(), ClientError> {
            Ok(())
        }
    }

    fn app() -> (ElevatorViewApp, Receiver<BackendCommand>) {
        let layout = LayoutConfig::new(800.0, 700.0, 4);
        let registry = WidgetRegistry::build(&layout).expect("registry");
        let (cmd_tx, cmd_rx) = bounded(8);
        let (_ui_tx, ui_rx) = bounded(8);
        let (_sync, snapshots) = StateSynchronizer::new(Arc::new(NeverAuthority), 4);
        (
            ElevatorViewApp::new(layout, registry, cmd_tx, ui_rx, snapshots),
            cmd_rx,
        )
    }

    #[test]
    fn press_and_release_are_translated_from_canvas_origin() {
        let (mut app, cmd_rx) = app();
        let target = app.registry.up_buttons()[0].geometry;
        let origin = egui::pos2(5.0, 40.0);
        let pos = origin + egui::vec2(target.x, target.y);

        app.handle_pointer(
            PointerInput {
                pressed: true,
                released: true,
                toggle_debug: false,
            },
            Some(pos),
            origin,
        );

        let sent: Vec<_> = cmd_rx
            .try_iter()
            .map(|cmd| match cmd {
                BackendCommand::Button(command) => command,
            })
            .collect();
        assert_eq!(
            sent,
            vec![
                ButtonCommand::new(ButtonKind::Up, 0, true),
                ButtonCommand::new(ButtonKind::Up, 0, false),
            ]
        );
    }

    #[test]
    fn d_key_toggles_debug_overlay() {
        let (mut app, _cmd_rx) = app();
        assert!(app.debug_overlay(None).is_none());

        let toggle = PointerInput {
            toggle_debug: true,
            ..Default::default()
        };
        app.handle_pointer(toggle, None, egui::Pos2::ZERO);
        let overlay = app
            .debug_overlay(Some(&ElevatorSnapshot::idle(4)))
            .expect("shown");
        assert!(overlay.contains("\"cabinButtons\""));
        assert!(overlay.contains("polls accepted: 0"));
        assert!(overlay.contains("(0 in a row)"));

        app.handle_pointer(toggle, None, egui::Pos2::ZERO);
        assert!(app.debug_overlay(None).is_none());
    }

    #[test]
    fn saturated_queue_shows_a_transport_banner() {
        let layout = LayoutConfig::new(800.0, 700.0, 4);
        let registry = WidgetRegistry::build(&layout).expect("registry");
        let (cmd_tx, _cmd_rx) = bounded(0);
        let (_ui_tx, ui_rx) = bounded(1);
        let (_sync, snapshots) = StateSynchronizer::new(Arc::new(NeverAuthority), 4);
        let mut app = ElevatorViewApp::new(layout, registry, cmd_tx, ui_rx, snapshots);
        let target = app.registry.cabin_buttons()[2].geometry;

        app.handle_pointer(
            PointerInput {
                pressed: true,
                ..Default::default()
            },
            Some(egui::pos2(target.x, target.y)),
            egui::Pos2::ZERO,
        );

        let status = app.status_line().expect("status");
        assert!(status.starts_with("Transport:"), "unexpected: {status}");
    }

    #[test]
    fn banner_clears_once_the_queue_accepts_again() {
        let layout = LayoutConfig::new(800.0, 700.0, 4);
        let registry = WidgetRegistry::build(&layout).expect("registry");
        let (cmd_tx, cmd_rx) = bounded(1);
        let (ui_tx, ui_rx) = bounded(1);
        let (_sync, snapshots) = StateSynchronizer::new(Arc::new(NeverAuthority), 4);
        let mut app = ElevatorViewApp::new(layout, registry, cmd_tx, ui_rx, snapshots);
        ui_tx
            .try_send(UiEvent::Info("Polling http://127.0.0.1:3001/api".to_string()))
            .expect("info queued");
        app.process_ui_events();
        let target = app.registry.cabin_buttons()[1].geometry;
        let pos = Some(egui::pos2(target.x, target.y));

        app.handle_pointer(
            PointerInput {
                pressed: true,
                released: true,
                toggle_debug: false,
            },
            pos,
            egui::Pos2::ZERO,
        );
        let status = app.status_line().expect("status");
        assert!(status.contains("full"), "unexpected: {status}");

        assert_eq!(cmd_rx.try_iter().count(), 1);
        app.handle_pointer(
            PointerInput {
                pressed: true,
                ..Default::default()
            },
            pos,
            egui::Pos2::ZERO,
        );

        assert_eq!(cmd_rx.try_iter().count(), 1);
        assert_eq!(
            app.status_line().as_deref(),
            Some("Polling http://127.0.0.1:3001/api")
        );
    }

    #[test]
    fn pointer_miss_keeps_the_banner() {
        let (cmd_tx, _cmd_rx) = bounded(0);
        let (mut app, _) = app();
        app.cmd_tx = cmd_tx;
        let target = app.registry.up_buttons()[0].geometry;

        let press = PointerInput {
            pressed: true,
            ..Default::default()
        };
        app.handle_pointer(press, Some(egui::pos2(target.x, target.y)), egui::Pos2::ZERO);
        app.handle_pointer(press, Some(egui::pos2(-50.0, -50.0)), egui::Pos2::ZERO);

        assert!(app.status_line().expect("status").contains("full"));
    }
}
