//! Main application for the GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};
use tracing::warn;

use crate::board::{GameStatus, Pos, Stone, CAPTURE_WIN_PAIRS};
use crate::config::GameConfig;
use crate::session::{EngineMove, GameMode, GameSession, Seat};

use super::board_view::{BoardView, Overlay};
use super::theme::*;

/// What a background search result is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchPurpose {
    /// Committed as the engine's move
    Play,
    /// Shown as a suggestion for the human to move
    Hint,
}

/// Search running on a background thread.
struct EngineWorker {
    receiver: Receiver<EngineMove>,
    started: Instant,
    purpose: SearchPurpose,
}

/// Main application
pub struct PenteApp {
    session: GameSession,
    board_view: BoardView,
    worker: Option<EngineWorker>,
    hint: Option<usize>,
    last_search: Option<(EngineMove, Duration)>,
    message: Option<String>,
}

impl PenteApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            session: GameSession::new(config),
            board_view: BoardView::default(),
            worker: None,
            hint: None,
            last_search: None,
            message: None,
        }
    }

    fn new_game(&mut self, mode: GameMode) {
        let config = GameConfig {
            mode,
            ..self.session.config().clone()
        };
        self.session = GameSession::new(config);
        self.reset_transient();
    }

    fn undo(&mut self) {
        self.session.undo();
        self.reset_transient();
    }

    /// Drop per-position state; a running search is abandoned.
    fn reset_transient(&mut self) {
        self.worker = None;
        self.hint = None;
        self.message = None;
    }

    fn start_search(&mut self, purpose: SearchPurpose) {
        let job = self.session.engine_job();
        let (tx, rx) = channel();
        thread::spawn(move || {
            // The receiver is gone when the position changed meanwhile
            let _ = tx.send(job.run());
        });
        self.worker = Some(EngineWorker {
            receiver: rx,
            started: Instant::now(),
            purpose,
        });
    }

    fn poll_engine(&mut self) {
        let Some(worker) = &self.worker else {
            return;
        };
        let received = worker.receiver.try_recv();
        let elapsed = worker.started.elapsed();
        let purpose = worker.purpose;
        let engine_move = match received {
            Ok(engine_move) => engine_move,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                self.worker = None;
                self.message = Some("Engine stopped without a move".to_string());
                return;
            }
        };

        self.worker = None;
        match purpose {
            SearchPurpose::Play => {
                self.last_search = Some((engine_move, elapsed));
                if let Err(err) = self.session.apply_engine_move(engine_move) {
                    warn!(%err, "engine move discarded");
                }
            }
            SearchPurpose::Hint if self.session.is_current(&engine_move) => self.hint = engine_move.choice,
            SearchPurpose::Hint => {}
        }
    }

    fn play(&mut self, index: usize) {
        self.hint = None;
        match self.session.play(index) {
            Ok(_) => self.message = None,
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    fn request_hint(&mut self) {
        if self.worker.is_none() && !self.session.status().is_over() && self.session.seat_to_move() == Seat::Human {
            self.start_search(SearchPurpose::Hint);
        }
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    let modes = [
                        ("New Game (PvE - Black)", GameMode::PlayerVsEngine { human: Stone::Black }),
                        ("New Game (PvE - White)", GameMode::PlayerVsEngine { human: Stone::White }),
                        ("New Game (PvP)", GameMode::PlayerVsPlayer),
                        ("New Game (Engine vs Engine)", GameMode::EngineVsEngine),
                    ];
                    for (label, mode) in modes {
                        if ui.button(label).clicked() {
                            self.new_game(mode);
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        self.undo();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.session.mode() {
                        GameMode::PlayerVsEngine { human } => format!("PvE - You: {}", human.name()),
                        GameMode::PlayerVsPlayer => "PvP - Hotseat".to_string(),
                        GameMode::EngineVsEngine => "Engine vs Engine".to_string(),
                    };
                    ui.label(format!("{mode_text} | {:?}", self.session.ruleset()));
                });
            });
        });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("PENTE").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);
                self.render_captures_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);
                ui.add_space(10.0);
                self.render_search_card(ui);

                if let Some(msg) = &self.message {
                    ui.add_space(10.0);
                    Frame::new()
                        .fill(MESSAGE_BG)
                        .corner_radius(CornerRadius::same(8))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                        });
                }
            });
    }

    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let status = self.session.status();
            if status.is_over() {
                ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_MUTED));
                let text = match status {
                    GameStatus::Draw => "Draw".to_string(),
                    other => other.to_string(),
                };
                ui.label(RichText::new(text).size(16.0).strong().color(WIN_HIGHLIGHT));
                return;
            }

            let turn = self.session.turn();
            ui.label(RichText::new(turn.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));
            let (text, color) = match &self.worker {
                Some(worker) if worker.purpose == SearchPurpose::Hint => (
                    format!("Looking for a hint... {:.1}s", worker.started.elapsed().as_secs_f32()),
                    STATUS_THINKING,
                ),
                Some(worker) => (
                    format!("Engine thinking... {:.1}s", worker.started.elapsed().as_secs_f32()),
                    STATUS_THINKING,
                ),
                None if self.session.seat_to_move() == Seat::Human => ("Your turn".to_string(), STATUS_READY),
                None => ("Engine to move".to_string(), STATUS_THINKING),
            };
            ui.label(RichText::new(text).size(12.0).color(color));
        });
    }

    fn render_captures_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("CAPTURES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            let board = self.session.board();
            for stone in [Stone::Black, Stone::White] {
                let pairs = board.captures(stone);
                ui.label(
                    RichText::new(format!("{}: {pairs}/{CAPTURE_WIN_PAIRS} pairs", stone.name()))
                        .size(13.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Undo").clicked() {
                    self.undo();
                }
                if ui.button("Hint").clicked() {
                    self.request_hint();
                }
                if ui.button("Restart").clicked() {
                    self.session.restart();
                    self.reset_transient();
                }
            });
            ui.add_space(6.0);
            let mut depth = self.session.config().depth;
            if ui.add(egui::Slider::new(&mut depth, 1..=crate::config::MAX_DEPTH).text("depth")).changed() {
                self.session.set_depth(depth);
            }
            ui.label(
                RichText::new(format!("Move #{}", self.session.board().history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_search_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("LAST SEARCH").size(10.0).color(TEXT_MUTED));
            match &self.last_search {
                Some((engine_move, elapsed)) => {
                    let choice = engine_move
                        .choice
                        .map_or_else(|| "no move".to_string(), |index| Pos::from_index(index).to_string());
                    ui.label(
                        RichText::new(format!("{} -> {choice}", engine_move.player.name()))
                            .size(12.0)
                            .color(TEXT_PRIMARY),
                    );
                    ui.label(
                        RichText::new(format!("{}ms", elapsed.as_millis()))
                            .size(10.0)
                            .color(TEXT_SECONDARY),
                    );
                }
                None => {
                    ui.label(RichText::new("Waiting for engine...").size(10.0).color(TEXT_MUTED));
                }
            }
        });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let board = self.session.board();
            let overlay = Overlay {
                turn: self.session.turn(),
                ruleset: self.session.ruleset(),
                last_move: board.last_move(),
                hint: self.hint,
                winning_line: self.session.winning_line(),
                interactive: !self.session.status().is_over()
                    && self.worker.is_none()
                    && self.session.seat_to_move() == Seat::Human,
            };

            if let Some(index) = self.board_view.show(ui, board, &overlay) {
                self.play(index);
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        let (undo, hint, restart) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::H),
                i.key_pressed(egui::Key::N),
            )
        });
        if undo {
            self.undo();
        }
        if hint {
            self.request_hint();
        }
        if restart {
            self.session.restart();
            self.reset_transient();
        }
    }
}

impl eframe::App for PenteApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.poll_engine();

        if self.session.is_engine_turn() && self.worker.is_none() {
            self.start_search(SearchPurpose::Play);
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.worker.is_some() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}
