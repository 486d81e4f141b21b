//! 계산기 페이지 HTML 렌더링.
//!
//! 폼 스키마([`FieldSpec`])와 결과 행([`ResultRow`])만으로 모든 계산기의 페이지를 만든다.

use crate::calc::{self, Calculator, ResultRow};
use crate::error::CalcError;
use crate::form::{FieldKind, FieldSpec, FormFields};
use crate::labs::Lab;

const STYLE: &str = r#"
    body { font-family: Arial, sans-serif; background-color: #f4f4f4; text-align: center; padding: 20px; }
    .container { background: white; padding: 20px; max-width: 520px; margin: auto; border-radius: 8px; box-shadow: 0 0 10px rgba(0,0,0,0.1); }
    input, select { width: 90%; padding: 8px; margin: 5px 0; border: 1px solid #ccc; border-radius: 4px; }
    input[type="submit"] { background-color: #28a745; color: white; border: none; cursor: pointer; }
    button { background-color: #dc3545; color: white; border: none; padding: 10px; cursor: pointer; width: 90%; margin-top: 10px; }
    table { margin: 20px auto; border-collapse: collapse; }
    td { padding: 4px 10px; border-bottom: 1px solid #eee; text-align: left; }
    .error { color: #c82333; }
"#;

/// HTML 특수 문자를 이스케이프한다.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="https://unpkg.com/htmx.org@1.9.4"></script>
    <style>{STYLE}</style>
</head>
<body>
<div class="container">
    <h1>{title}</h1>
{body}
    <p><a href="/">All calculators</a></p>
</div>
</body>
</html>
"#,
        title = escape(title),
    )
}

fn field_html(field: &FieldSpec, value: &str) -> String {
    let label = escape(field.label);
    let name = field.name;
    match field.kind {
        FieldKind::Number => format!(
            r#"        <label>{label}: <input type="text" name="{name}" value="{}"></label><br>
"#,
            escape(value)
        ),
        FieldKind::Select(options) => {
            let mut html = format!("        <label>{label}: <select name=\"{name}\">\n");
            let mut group = "";
            for opt in options() {
                if opt.group != group {
                    if !group.is_empty() {
                        html.push_str("            </optgroup>\n");
                    }
                    if !opt.group.is_empty() {
                        html.push_str(&format!(
                            "            <optgroup label=\"{}\">\n",
                            escape(opt.group)
                        ));
                    }
                    group = opt.group;
                }
                let selected = if opt.value == value { " selected" } else { "" };
                html.push_str(&format!(
                    "            <option value=\"{}\"{selected}>{}</option>\n",
                    escape(opt.value),
                    escape(opt.label)
                ));
            }
            if !group.is_empty() {
                html.push_str("            </optgroup>\n");
            }
            html.push_str("        </select></label><br>\n");
            html
        }
    }
}

fn form_html<C: Calculator>(form: &FormFields) -> String {
    let action = format!("/labs/{}", C::SLUG);
    let mut html = format!(
        "    <form method=\"post\" action=\"{action}\" hx-post=\"{action}\" hx-target=\"#results\" hx-swap=\"innerHTML\">\n"
    );
    for field in C::form_fields() {
        html.push_str(&field_html(field, form.text(field.name)));
    }
    html.push_str(
        r#"        <input type="submit" value="Calculate">
        <button type="submit" name="clear" value="true">Clear results</button>
    </form>
"#,
    );
    html
}

fn results_html(rows: &[ResultRow]) -> String {
    let mut html = String::from("<h2>Results</h2>\n<table>\n");
    for row in rows {
        html.push_str(&format!(
            "<tr><td>{}</td><td><b>{}</b></td></tr>\n",
            escape(&row.label),
            escape(&row.value)
        ));
    }
    html.push_str("</table>\n");
    html
}

fn error_html(err: &CalcError) -> String {
    format!("<p class=\"error\">{}</p>\n", escape(&err.to_string()))
}

fn lab_page<C: Calculator>(form: &FormFields, results: &str) -> String {
    let body = format!(
        "{}    <div id=\"results\">{results}</div>\n",
        form_html::<C>(form)
    );
    layout(C::TITLE, &body)
}

/// 기본값만 채운 빈 폼 페이지.
pub fn blank<C: Calculator>() -> String {
    let defaults = FormFields::from_pairs(C::form_defaults().iter().copied());
    lab_page::<C>(&defaults, "")
}

/// 폼 제출을 계산하고 입력값을 유지한 채 페이지를 다시 그린다.
///
/// `clear` 버튼이 눌렸으면 계산 없이 빈 폼을 돌려준다. `partial`이면
/// htmx 교체용으로 결과 영역만 렌더링한다.
pub fn submit<C: Calculator>(form: &FormFields, partial: bool) -> String {
    if form.has("clear") {
        return if partial { String::new() } else { blank::<C>() };
    }
    let results = match calc::run::<C>(C::from_form(form)) {
        Ok(output) => results_html(&C::result_rows(&output)),
        Err(err) => error_html(&err),
    };
    if partial {
        results
    } else {
        lab_page::<C>(form, &results)
    }
}

/// 계산기 목록 페이지.
pub fn index(labs: &[Lab]) -> String {
    let mut body = String::from("    <ul>\n");
    for lab in labs {
        body.push_str(&format!(
            "        <li><a href=\"/labs/{}\">{}</a></li>\n",
            lab.slug,
            escape(lab.title)
        ));
    }
    body.push_str("    </ul>\n    <p><a href=\"/calculate\">Electrical load calculator (JSON)</a></p>\n");
    layout("Power Engineering Calculators", &body)
}

/// 전기 부하 계산기의 JSON 클라이언트 페이지. `/calculate`로 POST 한다.
pub const LOAD_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Electrical Load Calculator</title>
</head>
<body>
    <h2>Enter Input Data</h2>
    <form id="calcForm">
        <label>Count: <input type="number" name="count" required></label><br>
        <label>Power (kW): <input type="number" step="any" name="power" required></label><br>
        <label>Voltage (V): <input type="number" step="any" name="voltage" required></label><br>
        <label>CosPhi: <input type="number" step="any" name="cos_phi" required></label><br>
        <label>Eta: <input type="number" step="any" name="eta" required></label><br>
        <label>Utilization Coeff.: <input type="number" step="any" name="util_coeff" required></label><br>
        <label>TgPhi: <input type="number" step="any" name="tg_phi" required></label><br>
        <label>Kv: <input type="number" step="any" name="kv" required></label><br>
        <button type="submit">Calculate</button>
    </form>
    <h3>Result:</h3>
    <p id="error" style="color: #c82333;"></p>
    <table border="1" id="resultTable" style="display:none;"></table>
    <script>
    document.getElementById("calcForm").addEventListener("submit", async function (event) {
        event.preventDefault();
        const data = {};
        new FormData(event.target).forEach((value, key) => { data[key] = parseFloat(value) || 0; });
        const error = document.getElementById("error");
        const table = document.getElementById("resultTable");
        error.textContent = "";
        table.style.display = "none";
        const response = await fetch("/calculate", {
            method: "POST",
            headers: { "Content-Type": "application/json" },
            body: JSON.stringify(data)
        });
        if (!response.ok) {
            error.textContent = await response.text();
            return;
        }
        const result = await response.json();
        table.innerHTML = "<tr><th>Parameter</th><th>Value</th></tr>";
        Object.keys(result).forEach(key => {
            table.innerHTML += "<tr><td>" + key + "</td><td>" + Number(result[key]).toFixed(2) + "</td></tr>";
        });
        table.style.display = "table";
    });
    </script>
</body>
</html>
"#;
