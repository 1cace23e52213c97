use std::process::ExitCode;

use backing_store::BackingStore;
use memory::{AllocPolicy, PhysicalMemory};
use vm_translator::{
    address_file, report, VmTranslator, BACKING_STORE_PATH, MEMORY_SIZE, PAGE_SIZE,
};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        let program = args.first().map(String::as_str).unwrap_or("vm-translator");
        eprintln!("Proper program usage is {} addresses.txt", program);
        return ExitCode::FAILURE;
    }

    let store = match BackingStore::<PAGE_SIZE, MEMORY_SIZE>::open(BACKING_STORE_PATH) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("Error opening file '{}': {:?}", BACKING_STORE_PATH, err);
            return ExitCode::FAILURE;
        }
    };

    let addresses = match address_file::read_addresses(&args[1]) {
        Ok(addresses) => addresses,
        Err(err) => {
            eprintln!("Error opening file '{}': ({})", args[1], err);
            return ExitCode::FAILURE;
        }
    };

    // The fixed geometry has one frame per logical page, so the allocator
    // cannot run out; FailFast still guards the invariant.
    let memory = PhysicalMemory::init(AllocPolicy::FailFast);
    let mut translator = VmTranslator::init(memory, store);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for &address in &addresses {
        let translation = match translator.translate(address) {
            Ok(translation) => translation,
            Err(err) => {
                eprintln!("Error translating address {}: {:?}", address, err);
                return ExitCode::FAILURE;
            }
        };
        if let Err(err) = report::write_translation(&mut out, &translation) {
            eprintln!("Error writing output: ({})", err);
            return ExitCode::FAILURE;
        }
    }

    if let Err(err) = report::write_summary(&mut out, &translator.stats()) {
        eprintln!("Error writing output: ({})", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
