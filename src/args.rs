//! Positional argument parsing for overloaded script functions.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use mlua::{AnyUserData, Error, MultiValue, Result, Table, Value};

use crate::classes::Class;

/// Builds the error raised when argument `pos` has the wrong type.
pub(crate) fn bad_argument(pos: usize, expected: &str, got: Option<&Value>) -> Error {
    let got = got.map(Value::type_name).unwrap_or("no value");
    Error::runtime(format!("bad argument #{pos} ({expected} expected, got {got})"))
}

/// Number stored in a Lua value, if it is one.
pub(crate) fn as_number(value: &Value) -> Option<f64> {
    match *value {
        Value::Integer(i) => Some(i as f64),
        Value::Number(n) => Some(n),
        _ => None,
    }
}

/// Reads `t[index]`, falling back to `default` when it is not a number.
pub(crate) fn table_number(t: &Table, index: i64, default: f32) -> Result<f32> {
    let value: Value = t.raw_get(index)?;
    Ok(as_number(&value).map_or(default, |n| n as f32))
}

/// Reads `t[key]` when it is a binding object of class `T`.
pub(crate) fn table_class<T: Class + Clone>(t: &Table, key: &str) -> Result<Option<T>> {
    let value: Value = t.raw_get(key)?;
    Ok(T::peek(&value))
}

pub(crate) fn c_string(text: &str, pos: usize) -> Result<CString> {
    CString::new(text).map_err(|_| bad_argument(pos, "string without embedded zeros", None))
}

/// Copies a string returned by raylib; `None` for a null pointer.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string valid for the duration of the call.
pub(crate) unsafe fn from_c_str(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
}

/// Cursor over the arguments of a call.
///
/// Lookahead helpers (`is_*`, `opt_*`) never fail, `opt_*` ones only consume a matching value.
pub(crate) struct Args {
    values: Vec<Value>,
    pos: usize,
}

impl Args {
    pub(crate) fn new(values: MultiValue) -> Self {
        Args {
            values: values.into_iter().collect(),
            pos: 0,
        }
    }

    /// 1-based position of the next argument.
    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.pos + 1
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<&Value> {
        self.values.get(self.pos)
    }

    pub(crate) fn next(&mut self) -> Value {
        let value = self.values.get(self.pos).cloned().unwrap_or(Value::Nil);
        self.pos += 1;
        value
    }

    pub(crate) fn skip(&mut self) {
        self.pos += 1;
    }

    /// Remaining arguments, consuming them.
    pub(crate) fn rest(&mut self) -> Vec<Value> {
        let rest = self.values.get(self.pos..).map(<[Value]>::to_vec).unwrap_or_default();
        self.pos = self.values.len();
        rest
    }

    pub(crate) fn is_number(&self) -> bool {
        self.peek().and_then(as_number).is_some()
    }

    pub(crate) fn is_table(&self) -> bool {
        matches!(self.peek(), Some(Value::Table(_)))
    }

    pub(crate) fn is_string(&self) -> bool {
        matches!(self.peek(), Some(Value::String(_)))
    }

    pub(crate) fn is<T: Class>(&self) -> bool {
        matches!(self.peek(), Some(Value::UserData(ud)) if ud.is::<T>())
    }

    pub(crate) fn error(&self, expected: &str) -> Error {
        bad_argument(self.position(), expected, self.peek())
    }

    pub(crate) fn number(&mut self) -> Result<f32> {
        match self.peek().and_then(as_number) {
            Some(n) => {
                self.skip();
                Ok(n as f32)
            }
            None => Err(self.error("number")),
        }
    }

    pub(crate) fn integer(&mut self) -> Result<i32> {
        match self.peek().and_then(as_number) {
            Some(n) => {
                self.skip();
                Ok(n as i32)
            }
            None => Err(self.error("number")),
        }
    }

    /// Next number, or `default` when the argument is absent or not a number.
    pub(crate) fn opt_number(&mut self, default: f32) -> f32 {
        let value = self.peek().and_then(as_number);
        self.skip();
        value.map_or(default, |n| n as f32)
    }

    pub(crate) fn opt_integer(&mut self, default: i64) -> i64 {
        let value = self.peek().and_then(as_number);
        self.skip();
        value.map_or(default, |n| n as i64)
    }

    pub(crate) fn table(&mut self) -> Result<Table> {
        match self.peek() {
            Some(Value::Table(t)) => {
                let t = t.clone();
                self.skip();
                Ok(t)
            }
            _ => Err(self.error("table")),
        }
    }

    pub(crate) fn string(&mut self) -> Result<String> {
        match self.peek() {
            Some(Value::String(s)) => {
                let s = String::from_utf8_lossy(&s.as_bytes()).into_owned();
                self.skip();
                Ok(s)
            }
            _ => Err(self.error("string")),
        }
    }

    /// First character of an optional string flag such as `'t'` or `'n'`.
    pub(crate) fn opt_flag(&mut self) -> Option<u8> {
        match self.peek() {
            Some(Value::String(s)) => {
                let flag = s.as_bytes().first().copied();
                self.skip();
                flag
            }
            _ => None,
        }
    }

    pub(crate) fn class<T: Class + Clone>(&mut self) -> Result<T> {
        match self.peek().and_then(T::peek) {
            Some(obj) => {
                self.skip();
                Ok(obj)
            }
            None => Err(self.error(T::NAME)),
        }
    }

    pub(crate) fn opt_class<T: Class + Clone>(&mut self) -> Option<T> {
        let obj = self.peek().and_then(T::peek)?;
        self.skip();
        Some(obj)
    }

    /// Next argument as a userdata of class `T`, without copying it.
    pub(crate) fn object<T: Class>(&mut self) -> Result<AnyUserData> {
        self.opt_object::<T>().ok_or_else(|| self.error(T::NAME))
    }

    pub(crate) fn opt_object<T: Class>(&mut self) -> Option<AnyUserData> {
        match self.peek() {
            Some(Value::UserData(ud)) if ud.is::<T>() => {
                let ud = ud.clone();
                self.skip();
                Some(ud)
            }
            _ => None,
        }
    }
}
