use wasm_bindgen::prelude::*;

/// Replaces `window.fetch` with a stub that answers from a fixed route table.
///
/// `routes_json` maps `"METHOD /path"` to `{ "status": 200, "body": ... }`; a bare
/// `/path` key answers GET. Unknown routes answer 404 with
/// `{ "message": "Product not found" }`.
/// Every call is recorded as a `"METHOD /path"` line in `window.__fetchCalls`,
/// and as `{ call, authorization, body }` in `window.__fetchRequests` once its
/// body has been read.
pub fn setup_fetch_mock(routes_json: &str) -> bool {
    #[wasm_bindgen(inline_js = r#"
    export function setup_fetch_mock(routes_json) {
        const routes = JSON.parse(routes_json);
        window.__fetchCalls = [];
        window.__fetchRequests = [];
        window.fetch = async function(input, init) {
            const isRequest = typeof input !== 'string' && !(input instanceof URL);
            const url = isRequest ? input.url : String(input);
            const method = ((init && init.method) || (isRequest && input.method) || 'GET').toUpperCase();
            const path = new URL(url, window.location.origin).pathname;
            const call = method + ' ' + path;
            window.__fetchCalls.push(call);
            console.log("[MOCK FETCH]", call);

            const headers = isRequest ? input.headers : new Headers((init && init.headers) || {});
            const text = isRequest ? await input.clone().text() : ((init && init.body) || '');
            let body = null;
            try { body = text ? JSON.parse(text) : null; } catch (e) { body = text; }
            window.__fetchRequests.push({
                call: call,
                authorization: headers.get('Authorization'),
                body: body
            });

            const route = routes[call] || (method === 'GET' ? routes[path] : undefined);
            const status = route ? route.status : 404;
            const payload = route ? route.body : { message: 'Product not found' };
            return new Response(JSON.stringify(payload), {
                status: status,
                headers: { 'Content-Type': 'application/json' }
            });
        };
        return true;
    }
    "#)]
    extern "C" {
        fn setup_fetch_mock(routes_json: &str) -> bool;
    }

    setup_fetch_mock(routes_json)
}

/// Number of recorded requests whose "METHOD /path" line equals `call`.
pub fn fetch_call_count(call: &str) -> u32 {
    #[wasm_bindgen(inline_js = r#"
    export function fetch_call_count(call) {
        return (window.__fetchCalls || []).filter(c => c === call).length;
    }
    "#)]
    extern "C" {
        fn fetch_call_count(call: &str) -> u32;
    }

    fetch_call_count(call)
}

/// JSON of the latest `{ call, authorization, body }` record for `call`,
/// or `null` while none has been recorded.
pub fn last_fetch_request(call: &str) -> String {
    #[wasm_bindgen(inline_js = r#"
    export function last_fetch_request(call) {
        const matching = (window.__fetchRequests || []).filter(r => r.call === call);
        return JSON.stringify(matching.length ? matching[matching.length - 1] : null);
    }
    "#)]
    extern "C" {
        fn last_fetch_request(call: &str) -> String;
    }

    last_fetch_request(call)
}
