mod handler;
mod protocol;

use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt};

use crate::{
    cli::Args,
    error::{AppError, AppResult},
};

use handler::BridgeHandler;
use protocol::{BridgeRequest, BridgeResponse, PROTOCOL_VERSION};

/// Host bridge: newline-delimited JSON request/response over stdio.
///
/// The host (an admin-page shim, an editor extension, a test harness) owns the
/// UI. The bridge answers with counts and verdicts; the confirm dialog itself
/// is the host's replacement for the default prompt, so the bridge never
/// blocks on user input.
pub fn run(args: Args) -> AppResult<()> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| AppError::Internal(e.to_string()))?;

    rt.block_on(async move {
        let mut stdin = io::BufReader::new(io::stdin());
        let mut stdout = io::BufWriter::new(io::stdout());
        let mut handler = BridgeHandler::new(args);
        let mut line = String::new();

        loop {
            line.clear();
            let n = stdin.read_line(&mut line).await?;
            if n == 0 {
                break;
            }
            let raw = line.trim();
            if raw.is_empty() {
                continue;
            }

            let req: BridgeRequest = match serde_json::from_str(raw) {
                Ok(r) => r,
                Err(e) => {
                    // Unreadable envelope; answer best-effort with an empty id.
                    let resp = BridgeResponse::<()>::err(
                        PROTOCOL_VERSION,
                        String::new(),
                        "INVALID_REQUEST",
                        e.to_string(),
                    );
                    write_line(&mut stdout, &resp).await?;
                    continue;
                }
            };

            let resp = handler.handle(req);
            write_line(&mut stdout, &resp).await?;
        }

        Ok(())
    })
}

async fn write_line<T: serde::Serialize>(
    stdout: &mut io::BufWriter<io::Stdout>,
    v: &T,
) -> AppResult<()> {
    let mut buf = serde_json::to_vec(v)?;
    buf.push(b'\n');
    stdout.write_all(&buf).await?;
    stdout.flush().await?;
    Ok(())
}
