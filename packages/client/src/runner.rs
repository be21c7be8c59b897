//! Client loop: print server events, send typed lines as push data.

use futures_util::{SinkExt, StreamExt};
use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use crate::{
    args::ClientArgs,
    error::ClientError,
    event::{encode_push_data, render_frame},
};

pub async fn run_client(args: ClientArgs) -> Result<(), ClientError> {
    let url = args.connect_url()?;
    let (stream, _) = connect_async(url.as_str()).await?;
    tracing::info!("Connected to {}", url);
    println!("Joined room '{}'. Type a message and press Enter (Ctrl-D to quit).", args.room);

    let (mut write, mut read) = stream.split();

    // rustyline blocks, so it lives on its own thread
    let (line_tx, mut line_rx) = mpsc::unbounded_channel::<String>();
    std::thread::spawn(move || read_lines(line_tx));

    loop {
        tokio::select! {
            frame = read.next() => match frame {
                Some(Ok(Message::Text(text))) => println!("{}", render_frame(text.as_str())),
                Some(Ok(Message::Close(_))) | None => {
                    println!("Connection closed by server");
                    break;
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
            },
            line = line_rx.recv() => match line {
                Some(line) => {
                    write.send(Message::Text(encode_push_data(&line)?.into())).await?;
                }
                None => {
                    let _ = write.send(Message::Close(None)).await;
                    break;
                }
            },
        }
    }

    Ok(())
}

fn read_lines(line_tx: mpsc::UnboundedSender<String>) {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            tracing::error!("Failed to initialize line editor: {}", e);
            return;
        }
    };

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.as_str());
                if line_tx.send(line).is_err() {
                    break;
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                tracing::error!("Failed to read line: {}", e);
                break;
            }
        }
    }
}
