use std::io::{self, Write};

use dotenvy::dotenv;
use quiz_relay::{
    api::{chat_client::HttpChatClient, quiz_source::HttpQuestionSource},
    config::app_config::CONFIG,
    models::{
        chat::{ChatSession, Role},
        error::ClientError,
        quiz_session::QuizPhase,
        view::{AnswerMark, QuizView},
    },
    service::{chat_relay::ChatRelay, quiz_controller::QuizController, text::render_markup},
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use reqwest::Client;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

type Input = Lines<BufReader<Stdin>>;

const USAGE: &str = "usage: quiz_relay <quiz|chat>";

#[tokio::main]
async fn main() {
    // Initialize .env
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let mode = std::env::args().nth(1);
    let client = Client::new();
    let input = BufReader::new(tokio::io::stdin()).lines();

    let result = match mode.as_deref() {
        Some("quiz") => run_quiz(client, input).await,
        Some("chat") => run_chat(client, input).await,
        _ => {
            eprintln!("{}", USAGE);
            return;
        }
    };

    if let Err(e) = result {
        error!("Client stopped: {}", e);
    }
}

fn prompt(text: &str) -> Result<(), ClientError> {
    print!("{}", text);
    io::stdout().flush()?;
    Ok(())
}

async fn run_quiz(client: Client, mut input: Input) -> Result<(), ClientError> {
    let source = HttpQuestionSource::new(&CONFIG.quiz.endpoint, client);
    let mut quiz = QuizController::new(source, ChaCha8Rng::from_os_rng(), CONFIG.quiz.pool_size);

    if let Err(e) = quiz.load().await {
        error!("Failed to start quiz: {}", e);
    }

    loop {
        match quiz.phase().clone() {
            QuizPhase::Presenting(index) => {
                print_question(quiz.view(), index, quiz.session().len());

                loop {
                    prompt("> ")?;
                    let Some(line) = input.next_line().await? else {
                        return Ok(());
                    };

                    let chosen = line
                        .trim()
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| n.checked_sub(1));
                    if let Some(choice) = chosen {
                        if quiz.select_index(choice) {
                            break;
                        }
                    }
                    println!("Escolha um número entre 1 e {}", quiz.view().answers.len());
                }

                print_marks(quiz.view());
                prompt("Enter para continuar")?;
                if input.next_line().await?.is_none() {
                    return Ok(());
                }
                quiz.advance();
            }
            phase => {
                match phase {
                    QuizPhase::Failed(message) => println!("Erro: {}", message),
                    _ => println!("\n{}", quiz.view().result.heading),
                }

                if !wants_retry(&mut input).await? {
                    return Ok(());
                }
                if let Err(e) = quiz.retry().await {
                    error!("Failed to restart quiz: {}", e);
                }
            }
        }
    }
}

async fn wants_retry(input: &mut Input) -> Result<bool, ClientError> {
    prompt("[r] tentar novamente, qualquer outra tecla para sair: ")?;
    let line = input.next_line().await?;
    Ok(matches!(line, Some(l) if l.trim().eq_ignore_ascii_case("r")))
}

fn print_question(view: &QuizView, index: usize, total: usize) {
    println!("\nPergunta {} de {}", index + 1, total);
    println!("{}", view.question);
    for (i, answer) in view.answers.iter().enumerate() {
        println!("  {}) {}", i + 1, answer.text);
    }
}

fn print_marks(view: &QuizView) {
    for answer in &view.answers {
        let mark = match answer.mark {
            AnswerMark::Correct => "✔",
            AnswerMark::Wrong => "✘",
            AnswerMark::Unmarked => " ",
        };
        println!("  {} {}", mark, answer.text);
    }
}

async fn run_chat(client: Client, mut input: Input) -> Result<(), ClientError> {
    let endpoint = HttpChatClient::new(&CONFIG.chat.endpoint, client);
    let session = ChatSession::new(&CONFIG.chat.user_prefix);
    let mut relay = ChatRelay::new(endpoint, session, CONFIG.chat.error_message.clone());

    info!("Chat session {} started", relay.session().user_id());
    println!("Digite sua mensagem (/quit para sair)");

    loop {
        prompt("Você: ")?;
        let Some(line) = input.next_line().await? else {
            return Ok(());
        };
        if line.trim() == "/quit" {
            return Ok(());
        }

        for entry in relay.send(&line).await {
            if entry.role == Role::Bot {
                println!("{}", render_markup(&entry.display()));
            }
        }
    }
}
