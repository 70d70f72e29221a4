use egui::{Context, Grid, ScrollArea};

use crate::ui::QuizUi;
use crate::ui::layout::{centered_panel, two_button_row};

pub fn ui_summary(app: &mut QuizUi, ctx: &Context) {
    let snapshot = app.session.snapshot();
    let rows = app.session.summary_rows();

    centered_panel(ctx, 620.0, 680.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🎉 ¡Fin del quiz!");
            ui.add_space(6.0);
            ui.label(format!(
                "Puntuación: {:.2} de {} ({} aciertos, {} pistas usadas)",
                snapshot.score,
                rows.len(),
                snapshot.raw_score,
                snapshot.hints_used
            ));
        });
        ui.add_space(10.0);

        ScrollArea::vertical().max_height(420.0).show(ui, |ui| {
            Grid::new("quiz_results_grid")
                .striped(true)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Nº");
                    ui.label("Pregunta");
                    ui.label("Tu respuesta");
                    ui.label("Respuesta");
                    ui.label("Estado");
                    ui.end_row();

                    for row in &rows {
                        ui.label(row.number.to_string());
                        ui.label(&row.prompt);
                        ui.label(row.answer.trim());
                        ui.label(&row.expected);
                        ui.label(row.state_label());
                        ui.end_row();
                    }
                });
        });

        ui.add_space(16.0);
        let (reintentar, salir) = two_button_row(ui, 420.0, "Reintentar", "Salir");
        if reintentar {
            app.session.retry();
            for input in &mut app.inputs {
                input.clear();
            }
            app.message.clear();
        }
        if salir {
            std::process::exit(0);
        }
    });
}
