pub const DASHBOARD_STYLES: &str = r#"
.dashboard-status {
    display: flex;
    align-items: center;
    justify-content: center;
    height: 300px;
    color: #4b5563;
    font-size: 14px;
}

.dashboard-error {
    background: #1a0a0a;
    border: 1px solid #7f1d1d;
    border-radius: 8px;
    padding: 16px 24px;
    color: #fca5a5;
    font-size: 14px;
}

/* Stat cards */
.stat-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(170px, 1fr));
    gap: 12px;
    margin-bottom: 20px;
}

.stat-card {
    position: relative;
    overflow: hidden;
    background: #111827;
    border: 1px solid #1f2937;
    border-radius: 10px;
    padding: 16px 18px;
}

.stat-card-accent {
    position: absolute;
    top: 0;
    left: 0;
    right: 0;
    height: 2px;
}

.stat-card-title {
    margin: 0 0 8px;
    font-size: 11px;
    color: #6b7280;
    font-weight: 600;
    text-transform: uppercase;
    letter-spacing: 0.08em;
}

.stat-card-value {
    margin: 0;
    font-size: 28px;
    font-weight: 700;
    color: #f9fafb;
    line-height: 1;
}

.stat-card-sub {
    margin: 5px 0 0;
    font-size: 12px;
    color: #4b5563;
}

/* Chart + filter row */
.dashboard-row {
    display: grid;
    grid-template-columns: 1fr 260px;
    gap: 12px;
    margin-bottom: 20px;
    align-items: start;
}

.panel {
    background: #111827;
    border: 1px solid #1f2937;
    border-radius: 10px;
    padding: 18px 20px;
}

.panel-title {
    margin: 0 0 14px;
    font-size: 12px;
    font-weight: 600;
    color: #9ca3af;
    text-transform: uppercase;
    letter-spacing: 0.07em;
}

.bar-chart {
    display: flex;
    align-items: flex-end;
    gap: 18px;
    height: 160px;
    padding: 0 8px;
    border-bottom: 1px dashed #1f2937;
}

.bar-column {
    flex: 1;
    display: flex;
    flex-direction: column;
    justify-content: flex-end;
    align-items: center;
    height: 100%;
}

.bar-value {
    font-size: 11px;
    color: #9ca3af;
    margin-bottom: 4px;
}

.bar {
    width: 100%;
    min-height: 2px;
    border-radius: 4px 4px 0 0;
    transition: height 0.3s;
}

.bar-labels {
    display: flex;
    gap: 18px;
    padding: 6px 8px 0;
}

.bar-label {
    flex: 1;
    text-align: center;
    font-size: 11px;
    color: #6b7280;
}

.filter-list {
    display: flex;
    flex-direction: column;
    gap: 6px;
}

.filter-option {
    display: flex;
    justify-content: space-between;
    align-items: center;
    background: transparent;
    border: 1px solid transparent;
    border-radius: 7px;
    color: #9ca3af;
    padding: 7px 10px;
    font-size: 13px;
    cursor: pointer;
    text-align: left;
}

.filter-option.active {
    background: #1f2937;
    border-color: #374151;
    color: #f9fafb;
}

.filter-option-name {
    display: flex;
    align-items: center;
    gap: 8px;
}

.filter-dot {
    width: 7px;
    height: 7px;
    border-radius: 50%;
    display: inline-block;
}

.filter-count {
    font-size: 11px;
    color: #374151;
}

/* Trace table */
.trace-table {
    background: #111827;
    border: 1px solid #1f2937;
    border-radius: 10px;
    overflow: hidden;
}

.trace-table-head,
.trace-row {
    display: grid;
    grid-template-columns: 110px 1fr 1fr 140px 80px;
    gap: 16px;
    padding: 12px 16px;
    align-items: center;
}

.trace-table-head {
    border-bottom: 1px solid #1f2937;
    font-size: 10px;
    font-weight: 700;
    color: #374151;
    text-transform: uppercase;
    letter-spacing: 0.08em;
}

.trace-row {
    border-bottom: 1px solid #1f2937;
    cursor: pointer;
    transition: background 0.1s;
}

.trace-row:last-child {
    border-bottom: none;
}

.trace-row:hover {
    background: #1f2937;
}

.trace-time {
    font-size: 12px;
    color: #9ca3af;
}

.trace-date {
    font-size: 10px;
    color: #4b5563;
    margin-top: 2px;
}

.trace-cell-text {
    font-size: 13px;
    color: #d1d5db;
    overflow: hidden;
    text-overflow: ellipsis;
    white-space: nowrap;
}

.trace-cell-text.muted {
    color: #6b7280;
}

.trace-latency {
    font-size: 12px;
    color: #6b7280;
}

.trace-empty {
    padding: 40px 16px;
    text-align: center;
    color: #374151;
    font-size: 13px;
}

/* Detail overlay */
.trace-modal-backdrop {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.7);
    backdrop-filter: blur(3px);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 1000;
    padding: 24px;
}

.trace-modal {
    position: relative;
    overflow: hidden;
    background: #0f172a;
    border: 1px solid #1f2937;
    border-radius: 12px;
    padding: 24px;
    width: 100%;
    max-width: 620px;
    max-height: 85vh;
    overflow-y: auto;
}

.trace-modal-accent {
    position: absolute;
    top: 0;
    left: 0;
    right: 0;
    height: 3px;
}

.trace-modal-head {
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
    margin-bottom: 20px;
}

.trace-modal-meta {
    display: flex;
    flex-direction: column;
    gap: 6px;
}

.trace-modal-when {
    font-size: 12px;
    color: #6b7280;
}

.trace-modal-close {
    background: transparent;
    border: 1px solid #1f2937;
    border-radius: 6px;
    color: #6b7280;
    width: 28px;
    height: 28px;
    cursor: pointer;
}

.trace-modal-section {
    margin-bottom: 16px;
}

.trace-modal-label {
    font-size: 11px;
    font-weight: 700;
    color: #6b7280;
    text-transform: uppercase;
    letter-spacing: 0.07em;
    margin-bottom: 8px;
}

.trace-modal-body {
    background: #111827;
    border: 1px solid #1f2937;
    border-radius: 8px;
    padding: 12px 14px;
    font-size: 14px;
    color: #d1d5db;
    line-height: 1.6;
    white-space: pre-wrap;
}
"#;
