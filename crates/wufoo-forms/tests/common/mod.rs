#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use serde_json::{json, Value};
use wufoo_forms::FieldRecord;

pub fn record(value: Value) -> FieldRecord {
    serde_json::from_value(value.clone())
        .unwrap_or_else(|e| panic!("Not a field record: {value}\nError: {e}"))
}

pub fn records(value: Value) -> Vec<FieldRecord> {
    serde_json::from_value(value.clone())
        .unwrap_or_else(|e| panic!("Not a field list: {value}\nError: {e}"))
}

/// A record with only the mandatory attributes.
pub fn minimal(id: &str, type_name: &str) -> Value {
    json!({
        "ID": id,
        "Type": type_name,
        "Title": format!("{id} title"),
        "IsRequired": "0",
        "ClassNames": ""
    })
}

/// A schema shaped like a real `fields.json` response.
pub fn contact_schema() -> Value {
    json!({
        "Fields": [
            {"ID": "EntryId", "Title": "Entry Id", "Type": "text", "IsRequired": "0", "ClassNames": ""},
            {
                "ID": "Field1", "Title": "Name", "Type": "shortname",
                "IsRequired": "1", "ClassNames": "", "Instructions": "", "Page": "1",
                "SubFields": [
                    {"DefaultVal": "", "ID": "Field1", "Label": "First"},
                    {"DefaultVal": "", "ID": "Field2", "Label": "Last"}
                ]
            },
            {"ID": "Field3", "Title": "Email", "Type": "email", "IsRequired": "1", "ClassNames": "leftHalf"},
            {"ID": "Field4", "Title": "Website", "Type": "url", "IsRequired": "0", "ClassNames": "rightHalf"},
            {
                "ID": "Field5", "Title": "Interests", "Type": "checkbox",
                "IsRequired": "0", "ClassNames": "",
                "SubFields": [
                    {"DefaultVal": "0", "ID": "Field5", "Label": "Hiking"},
                    {"DefaultVal": "0", "ID": "Field6", "Label": "Sailing"},
                    {"DefaultVal": "0", "ID": "Field7", "Label": "Chess"}
                ]
            },
            {
                "ID": "Field8", "Title": "Contact me by", "Type": "radio",
                "IsRequired": "1", "ClassNames": "",
                "Choices": [{"Label": "Phone", "Score": 0}, {"Label": "Email", "Score": 1}]
            },
            {"ID": "Field9", "Title": "Message", "Type": "textarea", "IsRequired": "0", "ClassNames": "", "HTMLID": "message"},
            {"ID": "Field10", "Title": "Attachment", "Type": "file", "IsRequired": "0", "ClassNames": ""},
            {"ID": "DateCreated", "Title": "Date Created", "Type": "date", "IsRequired": "0", "ClassNames": ""},
            {"ID": "CreatedBy", "Title": "Created By", "Type": "text", "IsRequired": "0", "ClassNames": ""},
            {"ID": "LastUpdated", "Title": "Last Updated", "Type": "date", "IsRequired": "0", "ClassNames": ""},
            {"ID": "UpdatedBy", "Title": "Updated By", "Type": "text", "IsRequired": "0", "ClassNames": ""}
        ]
    })
}

/// A one-shot HTTP server answering a single request with a canned body.
pub struct CannedServer {
    pub base_url: String,
    handle: JoinHandle<String>,
}

impl CannedServer {
    pub fn start(status: &str, body: &str) -> Self {
        Self::start_raw(format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        ))
    }

    /// Answers with `response` exactly as given, headers included.
    pub fn start_raw(response: String) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
        let addr = listener.local_addr().expect("listener address");

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept connection");
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
            let mut head = String::new();
            loop {
                let mut line = String::new();
                let n = reader.read_line(&mut line).expect("read request");
                if n == 0 || line == "\r\n" {
                    break;
                }
                head.push_str(&line);
            }
            stream
                .write_all(response.as_bytes())
                .expect("write response");
            stream.flush().expect("flush response");
            head
        });

        Self {
            base_url: format!("http://{addr}/api/v3"),
            handle,
        }
    }

    /// Waits for the request and returns its request line and headers.
    pub fn request(self) -> String {
        self.handle.join().expect("server thread panicked")
    }
}

/// Returns the value of a request header, matching the name case-insensitively.
pub fn header<'a>(head: &'a str, name: &str) -> Option<&'a str> {
    head.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        key.trim()
            .eq_ignore_ascii_case(name)
            .then_some(value.trim())
    })
}
