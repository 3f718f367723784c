use std::sync::Arc;

use anyhow::Context;
use taskbot_server::Server;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ServeArgs;
use crate::context::AppContext;

/// Handle `taskbot serve`.
pub async fn handle(args: &ServeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let addr = bind_address(args, ctx);
    let server = Server::bind(&addr, Arc::clone(&ctx.service))
        .with_context(|| format!("cannot start server on {addr}"))?;
    if let Some(local) = server.local_addr().filter(|_| !flags.quiet) {
        eprintln!("taskbot listening on http://{local} (Ctrl-C to stop)");
    }
    server.run_until_ctrl_c().await?;
    Ok(())
}

fn bind_address(args: &ServeArgs, ctx: &AppContext) -> String {
    let mut server = ctx.config.server.clone();
    if let Some(bind) = &args.bind {
        server.bind.clone_from(bind);
    }
    if let Some(port) = args.port {
        server.port = port;
    }
    server.address()
}
