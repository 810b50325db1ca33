//! `to_display_string` (`spec.md` §4.1).

use super::Value;

pub fn to_display_string(v: &Value) -> String {
  match v {
    Value::Int(i) => i.to_string(),
    Value::Float(f) => format_float(*f),
    Value::Str(s) => s.clone(),
    Value::Dict(d) => {
      let mut out = String::from("[");
      for (i, (k, v)) in d.iter().enumerate() {
        if i > 0 {
          out.push_str(", ");
        }
        out.push_str(&quoted_display(k));
        out.push_str(" = ");
        out.push_str(&quoted_display(v));
      }
      out.push(']');
      out
    }
  }
}

/// Inside a `Dict`'s own display, string entries are re-quoted with `"..."`;
/// other values use their plain display (`spec.md` §4.1).
fn quoted_display(v: &Value) -> String {
  match v {
    Value::Str(s) => format!("\"{s}\""),
    other => to_display_string(other),
  }
}

/// `Float`'s host-default double-to-string, with the `.0` suffix retained
/// for integral doubles (`4.0`, not `4`), so display is reproducible and
/// round-trips through `Value::from_input` back to the same `Float`.
fn format_float(f: f64) -> String {
  if f.is_nan() {
    return "NaN".to_string();
  }
  if f.is_infinite() {
    return if f > 0.0 { "inf".to_string() } else { "-inf".to_string() };
  }
  if f == f.trunc() && f.abs() < 1e15 {
    format!("{f:.1}")
  } else {
    format!("{f}")
  }
}
