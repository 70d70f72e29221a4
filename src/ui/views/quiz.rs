use egui::{Context, ScrollArea, TextEdit};

use crate::model::{Flash, PageOutcome, Phase};
use crate::ui::QuizUi;
use crate::ui::layout::{centered_panel, two_button_row};

pub fn ui_quiz(app: &mut QuizUi, ctx: &Context) {
    let snapshot = app.session.snapshot();
    let rows = app.session.page_rows();

    centered_panel(ctx, 640.0, 680.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("📝 Quiz de gramática JLPT N5");
            ui.label(app.session.page_info().label());
        });
        ui.add_space(10.0);

        ScrollArea::vertical().max_height(430.0).show(ui, |ui| {
            for row in &rows {
                ui.group(|ui| {
                    ui.label(format!("{}. {}", row.number, row.prompt));
                    ui.weak(&row.translation);

                    ui.horizontal(|ui| {
                        let response = ui.add(
                            TextEdit::singleline(&mut app.inputs[row.index])
                                .hint_text("Escribe tu respuesta")
                                .desired_width(220.0),
                        );
                        if response.changed() {
                            // El motor es el dueño; aquí solo se refleja el buffer.
                            let _ = app
                                .session
                                .set_answer(row.index, app.inputs[row.index].clone());
                        }
                        if ui.button("Comprobar").clicked() {
                            let _ = app.session.check_answer(row.index);
                        }
                        if ui.button("💡 Pista").clicked() {
                            let _ = app.session.request_hint(row.index);
                        }
                    });

                    if !row.hint_preview.is_empty() {
                        ui.label(format!("💡 Pista: {}…", row.hint_preview));
                    }

                    // Emoji transitorio de la última comprobación en esta pregunta.
                    if let Some(flash) = &snapshot.answer_flash {
                        let for_this_row = matches!(
                            flash,
                            Flash::Correct { index }
                                | Flash::Incorrect { index, .. }
                                | Flash::HintExhausted { index } if *index == row.index
                        );
                        if for_this_row {
                            ui.label(flash.label());
                        }
                    }
                });
                ui.add_space(6.0);
            }
        });

        ui.add_space(10.0);

        if snapshot.phase == Phase::PageCleared {
            ui.vertical_centered(|ui| {
                ui.heading(Flash::PageCleared.label());
                ui.label("Pasando a la página siguiente…");
            });
            ui.add_space(10.0);
        }

        let (comprobar, reintentar) = two_button_row(ui, 460.0, "Comprobar página", "Reintentar");
        if comprobar {
            app.message = match app.session.check_page() {
                PageOutcome::Pending { correct, total } => {
                    format!("Llevas {correct} de {total} en esta página. ¡Sigue!")
                }
                PageOutcome::Cleared { .. } => String::new(),
            };
        }
        if reintentar {
            app.session.retry();
            for input in &mut app.inputs {
                input.clear();
            }
            app.message.clear();
        }

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(&app.message);
            });
        }
    });
}
