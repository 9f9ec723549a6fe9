// Common test utilities shared by the provisioning tests
#![allow(dead_code)]

use std::{
    collections::HashMap,
    io::{BufRead, BufReader, Read, Write},
    net::{TcpListener, TcpStream},
    sync::{Arc, Mutex},
    thread,
};

use axis_provisioner::{
    config::{LaunchConfig, TokenConfig},
    constants::*,
    errors::*,
    submit::{SendOptions, Submitter},
};
use litesvm::LiteSVM;
use serde_json::Value;
use solana_sdk::{
    hash::Hash,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};

// Token configuration
pub const DECIMALS: u8 = 9;
pub const SUPPLY: u64 = 1_000_000_000; // 1B tokens
pub const PRIORITY_FEE: u64 = 500_000;

// Submitter backed by an in-process SVM
// Records every transaction it is asked to send, including rejected ones
pub struct SvmSubmitter {
    pub svm: LiteSVM,
    pub submitted: Vec<Transaction>,
    pub options: Vec<SendOptions>,
    // Programs not loaded in the SVM whose transactions are accepted without executing
    pub stubbed_programs: Vec<Pubkey>,
}

impl SvmSubmitter {
    pub fn new(svm: LiteSVM) -> Self {
        Self {
            svm,
            submitted: Vec::new(),
            options: Vec::new(),
            stubbed_programs: Vec::new(),
        }
    }

    pub fn with_stubbed_program(svm: LiteSVM, program: Pubkey) -> Self {
        let mut submitter = Self::new(svm);
        submitter.stubbed_programs.push(program);
        submitter
    }

    fn targets_stubbed_program(&self, transaction: &Transaction) -> bool {
        let message = &transaction.message;
        message.instructions.iter().any(|ix| {
            self.stubbed_programs
                .contains(&message.account_keys[ix.program_id_index as usize])
        })
    }
}

impl Submitter for SvmSubmitter {
    fn minimum_balance_for_rent_exemption(&self, data_len: usize) -> Result<u64> {
        Ok(self.svm.minimum_balance_for_rent_exemption(data_len))
    }

    fn latest_blockhash(&self) -> Result<Hash> {
        Ok(self.svm.latest_blockhash())
    }

    fn send_and_confirm(&mut self, transaction: &Transaction, options: SendOptions) -> Result<Signature> {
        self.submitted.push(transaction.clone());
        self.options.push(options);

        if self.targets_stubbed_program(transaction) {
            return Ok(transaction.signatures[0]);
        }

        self.svm
            .send_transaction(transaction.clone())
            .map(|meta| meta.signature)
            .map_err(|failed| ProvisionError::TransactionRejected(format!("{:?}", failed.err)))
    }
}

pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

pub fn launch_config(admin: Keypair) -> LaunchConfig {
    LaunchConfig {
        rpc_url: DEFAULT_RPC_URL.to_string(),
        admin,
        token: TokenConfig {
            supply: SUPPLY,
            decimals: DECIMALS,
            ..TokenConfig::default()
        },
        priority_fee_micro_lamports: PRIORITY_FEE,
        metadata_program: TOKEN_METADATA_PROGRAM_ID,
    }
}

// Lookup over a fixed set of environment values
pub fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let values: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();

    move |key: &str| values.get(key).cloned()
}

// ======================== JSON-RPC ENDPOINT ========================

type Handler = dyn Fn(&Value) -> (u16, String) + Send + Sync;

// Local HTTP endpoint answering JSON-RPC requests with a fixed handler
// Every request body is recorded in arrival order
pub struct MockEndpoint {
    pub url: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl MockEndpoint {
    pub fn start<F>(handler: F) -> Self
    where
        F: Fn(&Value) -> (u16, String) + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind mock endpoint");
        let url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        let handler: Arc<Handler> = Arc::new(handler);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let recorded = Arc::clone(&recorded);
                let handler = Arc::clone(&handler);
                thread::spawn(move || serve(stream, &recorded, handler.as_ref()));
            }
        });

        Self { url, requests }
    }

    // Always answers with the same status and body
    pub fn fixed(status: u16, body: &str) -> Self {
        let body = body.to_string();
        Self::start(move |_| (status, body.clone()))
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

fn serve(stream: TcpStream, recorded: &Mutex<Vec<Value>>, handler: &Handler) {
    let mut reader = BufReader::new(stream);

    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap_or(0) == 0 {
            return;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
    }

    let mut body = vec![0u8; content_length];
    if reader.read_exact(&mut body).is_err() {
        return;
    }

    let request: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    recorded.lock().unwrap().push(request.clone());
    let (status, response_body) = handler(&request);

    let reason = match status {
        200 => "OK",
        400 => "Bad Request",
        429 => "Too Many Requests",
        503 => "Service Unavailable",
        _ => "Error",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        response_body.len(),
        response_body
    );

    let mut stream = reader.into_inner();
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

// JSON-RPC success body echoing the request id
pub fn rpc_result(request: &Value, result: Value) -> String {
    serde_json::json!({ "jsonrpc": "2.0", "id": request["id"].clone(), "result": result }).to_string()
}
