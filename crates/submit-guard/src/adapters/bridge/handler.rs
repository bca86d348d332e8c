use serde::{de::DeserializeOwned, Serialize};

use crate::{
    cli::Args,
    core::{count, guard::GuardSettings, limits},
    error::{AppError, AppResult},
};

use super::protocol::*;

pub struct BridgeHandler {
    args: Args,
}

impl BridgeHandler {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    pub fn handle(&mut self, req: BridgeRequest) -> BridgeResponse<serde_json::Value> {
        if req.v != PROTOCOL_VERSION {
            return BridgeResponse::err(
                req.v,
                req.id,
                "INVALID_REQUEST",
                format!("unsupported protocol version: {}", req.v),
            );
        }

        match req.cmd.as_str() {
            "limit" => self.handle_limit(req),
            "count" => self.handle_count(req),
            "inspect" => self.handle_inspect(req),
            "check" => self.handle_check(req),
            other => BridgeResponse::err(
                req.v,
                req.id,
                "INVALID_REQUEST",
                format!("unknown cmd: {other}"),
            ),
        }
    }

    fn handle_limit(&self, req: BridgeRequest) -> BridgeResponse<serde_json::Value> {
        let p: LimitPayload = match parse(&req.payload) {
            Ok(v) => v,
            Err(e) => return fail(&req, e),
        };
        let limit = match p.candidates {
            Some(candidates) => limits::resolve_limit(candidates, p.default),
            None => limits::limit_from_env(&self.args.limit_candidate, p.default),
        };
        tracing::debug!(?limit, "resolved parameter limit");
        done(&req, &LimitResult { limit })
    }

    fn handle_count(&self, req: BridgeRequest) -> BridgeResponse<serde_json::Value> {
        let p: CountPayload = match parse(&req.payload) {
            Ok(v) => v,
            Err(e) => return fail(&req, e),
        };
        done(
            &req,
            &CountResult {
                count: count::estimate(&p.form),
            },
        )
    }

    fn handle_inspect(&self, req: BridgeRequest) -> BridgeResponse<serde_json::Value> {
        let p: InspectPayload = match parse(&req.payload) {
            Ok(v) => v,
            Err(e) => return fail(&req, e),
        };
        let entries: InspectResult = count::submitted_params(&p.form);
        done(&req, &entries)
    }

    fn handle_check(&self, req: BridgeRequest) -> BridgeResponse<serde_json::Value> {
        let p: CheckPayload = match parse(&req.payload) {
            Ok(v) => v,
            Err(e) => return fail(&req, e),
        };
        // The host limit fills in for a missing max_count, the same way the
        // admin glue hands the resolved limit to every guarded form.
        let mut options = p.options;
        if options.max_count.is_none() {
            options.max_count = limits::host_limit(
                self.args.max_count,
                &self.args.limit_candidate,
                self.args.default_limit,
            );
        }
        if options.max_count.is_none() {
            // No limit known from anywhere: the guard stays off rather than
            // falling back to the built-in default.
            tracing::debug!("no parameter limit known; form not guarded");
            return done(&req, &CheckResult::unguarded(count::estimate(&p.form)));
        }
        let settings = GuardSettings::resolve(options);
        done(&req, &CheckResult::from(settings.evaluate(&p.form)))
    }
}

fn parse<T: DeserializeOwned>(payload: &serde_json::Value) -> AppResult<T> {
    serde_json::from_value(payload.clone()).map_err(|e| AppError::InvalidRequest(e.to_string()))
}

fn done<T: Serialize>(req: &BridgeRequest, data: &T) -> BridgeResponse<serde_json::Value> {
    match serde_json::to_value(data) {
        Ok(v) => BridgeResponse::ok(req.v, req.id.clone(), v),
        Err(e) => fail(req, AppError::Json(e)),
    }
}

fn fail(req: &BridgeRequest, e: AppError) -> BridgeResponse<serde_json::Value> {
    BridgeResponse::err(req.v, req.id.clone(), e.code(), e.to_string())
}
