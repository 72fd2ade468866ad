//! Main application window

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};
use log::{debug, error, info};

use crate::board::Mark;
use crate::config::GameConfig;
use crate::engine::{GameEngine, MoveResult, Outcome, RejectReason};

use super::board_view::BoardView;
use super::theme::*;

/// Kind of status line shown in the side panel, mirroring the message
/// severity the game surfaces to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusKind {
    Info,
    Success,
    Danger,
}

#[derive(Debug, Clone)]
struct StatusLine {
    kind: StatusKind,
    text: String,
}

/// Board size presets offered in the menu
const PRESETS: [(&str, usize, usize, usize); 3] = [
    ("3x3, three in a row", 3, 3, 3),
    ("9x9, five in a row", 9, 9, 5),
    ("15x15, five in a row", 15, 15, 5),
];

/// Main application: owns the engine and wires clicks into it.
pub struct TicTacToeApp {
    engine: GameEngine,
    board_view: BoardView,
    status: Option<StatusLine>,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self {
            engine: GameEngine::new(GameConfig::default()),
            board_view: BoardView::default(),
            status: None,
        }
    }
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Start a fresh game with new settings
    fn new_game(&mut self, width: usize, height: usize, win_length: usize) {
        match GameConfig::new(width, height, win_length) {
            Ok(config) => {
                self.engine = GameEngine::new(config);
                self.status = None;
                info!("new game: {width}x{height}, {win_length} in a row");
            }
            Err(err) => error!("rejected game settings: {err}"),
        }
    }

    /// Clear the current game, keeping its settings
    fn reset(&mut self) {
        self.engine.reset();
        self.status = None;
        info!("board reset");
    }

    /// Feed a cell selection into the engine and react to the result
    fn handle_click(&mut self, col: i32, row: i32) {
        let result = self.engine.attempt_move(col, row);
        match result {
            MoveResult::Placed {
                col,
                row,
                mark,
                outcome,
            } => {
                info!("{mark} placed at ({col}, {row})");
                match outcome {
                    Outcome::Won(winner) => {
                        info!("player {winner} wins");
                        self.status = Some(StatusLine {
                            kind: StatusKind::Success,
                            text: format!("Player {winner} is the winner!"),
                        });
                    }
                    Outcome::Drawn => {
                        info!("game drawn");
                        self.status = Some(StatusLine {
                            kind: StatusKind::Info,
                            text: "The game ended in a draw...".to_string(),
                        });
                    }
                    Outcome::Ongoing => self.status = None,
                }
            }
            MoveResult::Rejected(reason) => {
                debug!("move at ({col}, {row}) rejected: {reason:?}");
                if reason == RejectReason::GameOver {
                    self.status = Some(StatusLine {
                        kind: StatusKind::Danger,
                        text: "Game is over!".to_string(),
                    });
                }
                // An occupied cell is silently ignored, like the
                // hover preview already suggests
            }
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    for (label, width, height, win_length) in PRESETS {
                        if ui.button(format!("New Game ({label})")).clicked() {
                            self.new_game(width, height, win_length);
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Reset (N)").clicked() {
                        self.reset();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let config = self.engine.config();
                    ui.label(format!(
                        "{}x{} - {} in a row",
                        config.width(),
                        config.height(),
                        config.win_length()
                    ));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if let Some(status) = self.status.clone() {
                    ui.add_space(10.0);
                    Self::render_status_card(ui, &status);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("X/O").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(
                RichText::new("TIC-TAC-TOE")
                    .size(20.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TURN").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            match self.engine.outcome() {
                Outcome::Ongoing => {
                    let mark = self.engine.next_mark();
                    let color = if mark == Mark::X { X_MARK } else { O_MARK };
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(mark.to_string()).size(28.0).strong().color(color));
                        ui.add_space(8.0);
                        ui.label(RichText::new("to move").size(12.0).color(TEXT_SECONDARY));
                    });
                }
                Outcome::Won(winner) => {
                    ui.label(
                        RichText::new(format!("{winner} wins"))
                            .size(18.0)
                            .strong()
                            .color(WIN_HIGHLIGHT),
                    );
                }
                Outcome::Drawn => {
                    ui.label(RichText::new("Draw").size(18.0).strong().color(TEXT_SECONDARY));
                }
            }

            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Move #{}", self.engine.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);
            if ui.button("Reset game").clicked() {
                self.reset();
            }
        });
    }

    fn render_status_card(ui: &mut egui::Ui, status: &StatusLine) {
        let fill = match status.kind {
            StatusKind::Info => STATUS_INFO,
            StatusKind::Success => STATUS_SUCCESS,
            StatusKind::Danger => STATUS_DANGER,
        };
        Frame::new()
            .fill(fill)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(&status.text).size(12.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            if let Some((col, row)) = self.board_view.show(ui, &self.engine) {
                self.handle_click(col, row);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let reset_pressed = ctx.input(|i| i.key_pressed(egui::Key::N));
        if reset_pressed {
            self.reset();
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
