//! Interactive chat loop.

use std::io::Write as _;

use tokio::io::{AsyncBufReadExt, BufReader};

use sherpa_client::{AgentClient, ChatSession, SubmitOutcome};

/// Run the interactive loop until EOF, `/quit`, or `/exit`.
pub async fn run(session: &mut ChatSession, client: &dyn AgentClient) -> std::io::Result<()> {
    for message in session.transcript() {
        print_assistant(&message.text);
    }

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    prompt()?;
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "/quit" | "/exit" => break,
            "/reset" => {
                session.reset();
                print_assistant(&session.transcript()[0].text);
            }
            input => {
                let before = session.message_count();
                match session.submit(client, input).await {
                    SubmitOutcome::IgnoredEmpty | SubmitOutcome::IgnoredBusy => {}
                    SubmitOutcome::Delivered { .. } | SubmitOutcome::Fallback => {
                        // Skip the echoed user message.
                        for message in &session.transcript()[before + 1..] {
                            print_assistant(&message.text);
                        }
                    }
                }
            }
        }
        prompt()?;
    }

    Ok(())
}

fn print_assistant(text: &str) {
    println!("sherpa> {text}");
}

fn prompt() -> std::io::Result<()> {
    print!("you> ");
    std::io::stdout().flush()
}
