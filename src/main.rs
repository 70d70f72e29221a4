use n5_quiz::QuizSession;
use n5_quiz::data;
use n5_quiz::ui::QuizUi;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let mut questions = match data::read_questions_embedded() {
        Ok(questions) => questions,
        Err(err) => {
            // Sin banco no hay sesión: error fatal.
            log::error!("no se pudo cargar el banco de preguntas: {err}");
            std::process::exit(1);
        }
    };

    // Barajado opcional: permutación uniforme, nunca el sort aleatorio.
    if std::env::args().any(|arg| arg == "--shuffle") {
        questions = data::shuffled(&questions, &mut rand::thread_rng());
        log::info!("banco barajado ({} preguntas)", questions.len());
    }

    let session = QuizSession::new(questions);

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "JLPT N5 Grammar Quiz",
        options,
        Box::new(|_cc| Ok(Box::new(QuizUi::new(session)))),
    )
}
