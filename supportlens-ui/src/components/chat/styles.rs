pub const CHAT_STYLES: &str = r#"
.chat-container {
    display: flex;
    flex-direction: column;
    height: 100%;
    max-width: 820px;
    margin: 0 auto;
    background: #0b1120;
    border: 1px solid #1f2937;
    border-radius: 12px;
    overflow: hidden;
}

.chat-log {
    flex: 1;
    overflow-y: auto;
    padding: 20px;
    display: flex;
    flex-direction: column;
    gap: 14px;
}

.chat-empty {
    margin: auto;
    text-align: center;
    color: #4b5563;
}

.chat-empty-icon {
    font-size: 32px;
    margin-bottom: 10px;
}

.chat-empty-title {
    font-weight: 600;
    color: #6b7280;
    margin-bottom: 4px;
}

.chat-empty-hint {
    font-size: 13px;
}

.chat-row {
    display: flex;
    gap: 10px;
    align-items: flex-start;
}

.chat-row.user {
    justify-content: flex-end;
}

.chat-avatar {
    width: 30px;
    height: 30px;
    border-radius: 8px;
    display: flex;
    align-items: center;
    justify-content: center;
    flex-shrink: 0;
    background: #1e293b;
    border: 1px solid #334155;
    font-size: 14px;
}

.chat-avatar.error {
    background: #1a0a0a;
    border-color: #7f1d1d;
    color: #fca5a5;
    font-weight: 700;
}

.chat-bubble-column {
    max-width: 72%;
}

.chat-bubble {
    padding: 10px 14px;
    border-radius: 10px;
    font-size: 14px;
    line-height: 1.6;
    white-space: pre-wrap;
    word-break: break-word;
    color: #e5e7eb;
    background: #1e293b;
    border: 1px solid #334155;
}

.chat-bubble.user {
    background: #1e3a5f;
    border-color: #3b82f644;
}

.chat-bubble.error {
    background: #1a0a0a;
    border-color: #7f1d1d;
    color: #fca5a5;
}

.chat-tag {
    margin-top: 6px;
    display: flex;
    gap: 8px;
    align-items: center;
    padding-left: 2px;
}

.chat-latency {
    font-size: 11px;
    color: #4b5563;
}

.chat-input-bar {
    display: flex;
    gap: 10px;
    padding: 14px 16px;
    border-top: 1px solid #1f2937;
    background: #030712;
}

.chat-textarea {
    flex: 1;
    resize: none;
    background: #111827;
    border: 1px solid #1f2937;
    border-radius: 8px;
    color: #f9fafb;
    padding: 10px 12px;
    font-family: inherit;
    font-size: 14px;
    outline: none;
}

.chat-textarea:focus {
    border-color: #3b82f6;
}

.chat-send {
    background: #3b82f6;
    border: none;
    border-radius: 8px;
    color: white;
    font-weight: 600;
    padding: 0 20px;
    cursor: pointer;
}

.chat-send:disabled {
    background: #1f2937;
    color: #4b5563;
    cursor: not-allowed;
}
"#;
