pub const APP_STYLES: &str = r#"
*, *::before, *::after {
    box-sizing: border-box;
    margin: 0;
    padding: 0;
}

html, body, #main {
    height: 100%;
}

body {
    background: #030712;
    color: #e5e7eb;
    font-family: "DM Sans", system-ui, sans-serif;
    -webkit-font-smoothing: antialiased;
}

::-webkit-scrollbar { width: 5px; height: 5px; }
::-webkit-scrollbar-track { background: transparent; }
::-webkit-scrollbar-thumb { background: #1f2937; border-radius: 10px; }
::-webkit-scrollbar-thumb:hover { background: #374151; }

@keyframes blink {
    0%, 100% { opacity: 0.25; transform: scale(0.75); }
    50% { opacity: 1; transform: scale(1); }
}

/* Shell */
.app-shell {
    display: flex;
    flex-direction: column;
    height: 100vh;
}

.app-header {
    display: flex;
    align-items: center;
    gap: 0.6rem;
    padding: 0 1.5rem;
    height: 56px;
    border-bottom: 1px solid #111827;
    background: #030712;
    flex-shrink: 0;
}

.app-brand {
    font-weight: 700;
    font-size: 15px;
    color: #f9fafb;
    letter-spacing: -0.01em;
}

.app-spacer {
    flex: 1;
}

.app-tabs {
    display: flex;
    gap: 2px;
    background: #111827;
    border-radius: 8px;
    padding: 3px;
}

.app-tab {
    background: transparent;
    border: none;
    color: #6b7280;
    border-radius: 6px;
    padding: 0.4rem 1rem;
    font-size: 13px;
    font-weight: 500;
    cursor: pointer;
    transition: all 0.15s;
}

.app-tab.active {
    background: #1f2937;
    color: #f9fafb;
}

.refresh-button {
    background: transparent;
    border: 1px solid #1f2937;
    color: #6b7280;
    border-radius: 7px;
    padding: 0.4rem 0.8rem;
    font-size: 12px;
    cursor: pointer;
    transition: all 0.15s;
}

.refresh-button:hover {
    color: #d1d5db;
    border-color: #374151;
}

.app-main {
    flex: 1;
    overflow: hidden;
    padding: 20px 24px;
}

.app-main-scroll {
    height: 100%;
    overflow-y: auto;
    padding-bottom: 32px;
}

/* Shared pieces */
.category-badge {
    display: inline-block;
    border-radius: 5px;
    padding: 2px 8px;
    font-size: 11px;
    font-weight: 600;
    white-space: nowrap;
}

.spinner {
    display: inline-flex;
    gap: 4px;
    align-items: center;
}

.spinner-dot {
    width: 6px;
    height: 6px;
    border-radius: 50%;
    background: #6b7280;
    display: inline-block;
    animation: blink 1s infinite ease-in-out;
}
"#;
