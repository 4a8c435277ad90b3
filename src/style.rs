pub const APP_STYLE: &str = r#"
:root {
    color-scheme: dark;
    font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    background-color: #0b1020;
    color: #eef2ff;
}

body {
    margin: 0;
}

.app {
    display: flex;
    flex-direction: column;
    min-height: 100vh;
}

header {
    padding: 22px 32px 16px;
    display: flex;
    align-items: flex-end;
    justify-content: space-between;
    background: linear-gradient(180deg, rgba(20, 27, 52, 0.95), rgba(11, 16, 32, 0.6));
    border-bottom: 1px solid rgba(129, 140, 248, 0.25);
}

header .branding {
    display: flex;
    flex-direction: column;
    gap: 4px;
}

header .title {
    font-size: 26px;
    font-weight: 700;
    letter-spacing: 0.06em;
    text-transform: uppercase;
}

header .subtitle {
    font-size: 15px;
    color: rgba(226, 232, 255, 0.7);
}

main {
    display: grid;
    grid-template-columns: 340px 1fr;
    gap: 24px;
    padding: 24px 32px 48px;
}

.sidebar {
    display: flex;
    flex-direction: column;
    gap: 20px;
}

.content {
    display: flex;
    flex-direction: column;
    gap: 24px;
}

.panel {
    background: rgba(19, 26, 51, 0.92);
    border-radius: 16px;
    border: 1px solid rgba(129, 140, 248, 0.2);
    padding: 18px 20px;
    box-shadow: inset 0 1px 0 rgba(255, 255, 255, 0.04), 0 16px 42px rgba(4, 7, 18, 0.6);
    display: flex;
    flex-direction: column;
    gap: 14px;
}

.panel h2 {
    margin: 0;
    font-size: 19px;
    letter-spacing: 0.05em;
    text-transform: uppercase;
}

.panel h3 {
    margin: 0;
    font-size: 15px;
    letter-spacing: 0.04em;
    text-transform: uppercase;
    color: rgba(199, 210, 254, 0.9);
}

.panel p {
    margin: 0;
    color: rgba(226, 232, 255, 0.72);
    font-size: 14px;
}

.panel section {
    display: flex;
    flex-direction: column;
    gap: 10px;
}

label {
    display: flex;
    flex-direction: column;
    gap: 6px;
    font-size: 13px;
    color: rgba(199, 210, 254, 0.85);
}

input, textarea, select {
    background: rgba(10, 14, 30, 0.85);
    border: 1px solid rgba(129, 140, 248, 0.4);
    border-radius: 10px;
    padding: 10px 12px;
    color: #eef2ff;
    font-size: 14px;
    font-family: inherit;
}

textarea {
    min-height: 80px;
    resize: vertical;
}

button {
    background: linear-gradient(120deg, #818cf8, #6366f1);
    border: none;
    border-radius: 999px;
    padding: 10px 18px;
    color: #0b1020;
    font-weight: 600;
    letter-spacing: 0.05em;
    text-transform: uppercase;
    cursor: pointer;
    transition: transform 160ms ease, box-shadow 160ms ease;
}

button.secondary {
    background: rgba(129, 140, 248, 0.12);
    color: rgba(226, 232, 255, 0.85);
    border: 1px solid rgba(129, 140, 248, 0.35);
}

button:disabled {
    opacity: 0.4;
    cursor: not-allowed;
}

button:hover:not(:disabled) {
    transform: translateY(-1px);
    box-shadow: 0 10px 20px rgba(129, 140, 248, 0.25);
}

.preview-header {
    display: flex;
    align-items: flex-start;
    justify-content: space-between;
    gap: 16px;
}

.preview-header h2 {
    font-size: 26px;
    text-transform: none;
    letter-spacing: 0;
}

.badge-row {
    display: flex;
    flex-wrap: wrap;
    gap: 8px;
}

.badge {
    padding: 5px 12px;
    border-radius: 999px;
    border: 1px solid rgba(129, 140, 248, 0.35);
    background: rgba(129, 140, 248, 0.1);
    font-size: 13px;
    color: rgba(226, 232, 255, 0.85);
}

.detail-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
    gap: 16px;
}

.detail-card {
    background: rgba(10, 14, 30, 0.6);
    border-radius: 12px;
    border: 1px solid rgba(129, 140, 248, 0.16);
    padding: 14px 16px;
}

.preview-image {
    width: 100%;
    max-height: 480px;
    object-fit: cover;
    border-radius: 12px;
    border: 1px solid rgba(129, 140, 248, 0.2);
}

.image-placeholder {
    display: flex;
    align-items: center;
    justify-content: center;
    min-height: 160px;
    border-radius: 12px;
    border: 1px dashed rgba(129, 140, 248, 0.3);
    background: rgba(10, 14, 30, 0.6);
    color: rgba(226, 232, 255, 0.55);
    font-size: 14px;
    letter-spacing: 0.05em;
    text-transform: uppercase;
}

.placeholder {
    align-items: center;
    justify-content: center;
    min-height: 220px;
    text-align: center;
    border-style: dashed;
}

.error-text {
    color: rgba(255, 160, 160, 0.9);
}

.modal-backdrop {
    position: fixed;
    inset: 0;
    background: rgba(5, 8, 18, 0.75);
    backdrop-filter: blur(4px);
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 24px;
    z-index: 100;
}

.modal {
    width: min(520px, 100%);
    max-height: 90vh;
    overflow-y: auto;
}

.modal-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.modal-actions {
    display: flex;
    justify-content: flex-end;
    gap: 12px;
    padding-top: 8px;
}

.log-feed {
    max-height: 220px;
    overflow-y: auto;
    background: rgba(7, 10, 22, 0.65);
    border-radius: 12px;
    border: 1px solid rgba(129, 140, 248, 0.24);
    padding: 12px 14px;
    font-family: 'JetBrains Mono', 'SFMono-Regular', monospace;
    font-size: 12px;
    display: flex;
    flex-direction: column;
    gap: 10px;
}

.log-line {
    display: flex;
    flex-direction: column;
    gap: 4px;
}

.log-line .ts {
    color: rgba(165, 180, 252, 0.7);
    font-size: 11px;
}

.log-line.info { color: rgba(226, 232, 255, 0.72); }
.log-line.success { color: rgba(167, 243, 208, 0.86); }
.log-line.warn { color: rgba(253, 230, 138, 0.9); }
.log-line.error { color: rgba(252, 165, 165, 0.88); }
"#;
