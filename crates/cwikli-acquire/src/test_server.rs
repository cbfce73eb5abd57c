//! A throwaway HTTP responder on localhost for exercising the fetcher.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

#[derive(Clone, Copy)]
pub enum Reply {
    /// 200 with this HTML body.
    Page(&'static str),
    /// An empty response with this status.
    Status(u16),
    /// 302 back to the same path, forever.
    RedirectToSelf,
    /// Read the request and never answer.
    Stall,
}

/// Start a responder and return the base URL words are appended to.
pub async fn serve(reply: Reply) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;

                let response = match reply {
                    Reply::Page(body) => format!(
                        "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        body.len()
                    ),
                    Reply::Status(code) => format!(
                        "HTTP/1.1 {code} Status\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                    ),
                    Reply::RedirectToSelf => "HTTP/1.1 302 Found\r\nLocation: /wiki/loop\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_string(),
                    Reply::Stall => {
                        std::future::pending::<()>().await;
                        return;
                    }
                };

                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{addr}/wiki/")
}

/// A base URL on a port nothing is listening on.
pub async fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/wiki/")
}
