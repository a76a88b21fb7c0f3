use axum::{
    extract::Extension,
    response::Html,
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use crate::catalog::{catalog, Catalog};
use crate::AppState;

pub fn ui_routes() -> Router {
    Router::new()
        .route("/", get(studio_page))
        .route("/api/catalog", get(get_catalog))
}

/// GET /api/catalog - Stock avatars (with absolute URLs) and voices
pub async fn get_catalog(Extension(state): Extension<Arc<AppState>>) -> Json<Catalog> {
    Json(catalog(&state.config.public_base_url))
}

pub async fn studio_page() -> Html<&'static str> {
    Html(STUDIO_HTML)
}

const STUDIO_HTML: &str = r###"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>AI UGC Ad Video Generator</title>
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; max-width: 760px; margin: 0 auto; padding: 2rem; }
        textarea { width: 100%; max-width: 600px; }
        .avatars { display: flex; gap: 10px; margin: 10px 0; }
        .avatars img { width: 96px; height: 96px; border-radius: 50%; cursor: pointer; border: 2px solid #ccc; }
        .avatars img.selected { border: 3px solid #0070f3; }
        .error { color: red; }
        pre { background: #111; color: #eee; padding: 1rem; border-radius: 8px; overflow-x: auto; font-size: 0.8rem; }
        video { max-width: 100%; border-radius: 8px; }
    </style>
</head>
<body>
    <h1>AI UGC Ad Video Generator</h1>

    <section>
        <label for="script">UGC Ad Script</label>
        <textarea id="script" rows="6"></textarea>
    </section>

    <section>
        <p>Choose an avatar:</p>
        <select id="group"></select>
        <div class="avatars" id="avatars"></div>
    </section>

    <select id="voice"></select>
    <button id="generate">Generate Video</button>

    <section id="view" style="margin-top: 2rem">
        <p>No video generated yet. Submit a script to generate one.</p>
    </section>

    <script>
        let catalog = null;
        let selectedAvatar = null;
        let busy = false;
        const view = document.getElementById('view');

        function show(node) {
            view.replaceChildren(node);
        }

        function message(text, cls) {
            const p = document.createElement('p');
            p.textContent = text;
            if (cls) p.className = cls;
            return p;
        }

        function renderAvatars() {
            const group = catalog.avatar_groups.find(g => g.name === document.getElementById('group').value);
            const box = document.getElementById('avatars');
            box.replaceChildren();
            for (const avatar of group.avatars) {
                const img = document.createElement('img');
                img.src = avatar.url;
                img.className = avatar.url === selectedAvatar ? 'selected' : '';
                img.onclick = () => { selectedAvatar = avatar.url; renderAvatars(); };
                box.appendChild(img);
            }
        }

        function findUrl(data) {
            return data.result_url || data.url || (data.result && data.result.url) || null;
        }

        async function generate() {
            if (busy) return;
            const script = document.getElementById('script').value;
            if (!script.trim()) return show(message('Please enter a script for your UGC ad.', 'error'));
            if (!selectedAvatar) return show(message('Please select an avatar image first.', 'error'));

            busy = true;
            const button = document.getElementById('generate');
            button.disabled = true;
            button.textContent = 'Generating...';
            show(message('Generating...'));

            try {
                const res = await fetch('/api/video', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({ script, avatarImage: selectedAvatar, voiceId: document.getElementById('voice').value }),
                });
                if (!res.ok) {
                    const text = await res.text();
                    throw new Error(text || 'Failed to generate video');
                }
                const data = await res.json();
                const url = findUrl(data);
                const wrap = document.createElement('div');
                const title = document.createElement('h2');
                title.textContent = 'Video Result';
                wrap.appendChild(title);
                if (url) {
                    const video = document.createElement('video');
                    video.src = url;
                    video.controls = true;
                    wrap.appendChild(video);
                } else {
                    wrap.appendChild(message('The video was created, but a direct video URL was not found in the response. Here is the raw response from the API:'));
                    const pre = document.createElement('pre');
                    pre.textContent = JSON.stringify(data, null, 2);
                    wrap.appendChild(pre);
                }
                show(wrap);
            } catch (err) {
                show(message(err.message || 'Something went wrong while generating the video.', 'error'));
            } finally {
                busy = false;
                button.disabled = false;
                button.textContent = 'Generate Video';
            }
        }

        async function init() {
            catalog = await (await fetch('/api/catalog')).json();
            const group = document.getElementById('group');
            for (const g of catalog.avatar_groups) group.add(new Option(g.label, g.name));
            group.onchange = renderAvatars;
            const voice = document.getElementById('voice');
            for (const v of catalog.voices) voice.add(new Option(v.label, v.id));
            voice.value = catalog.default_voice;
            renderAvatars();
            document.getElementById('generate').onclick = generate;
        }

        init();
    </script>
</body>
</html>
"###;
