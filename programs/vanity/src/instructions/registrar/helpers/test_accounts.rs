//! Account memory for unit tests, laid out the way the runtime serializes
//! program input. `AccountInfo::assign` and `realloc` write next to the key,
//! owner and data slices, so those need to sit inside one buffer.

use anchor_lang::prelude::*;

// dup marker, signer, writable, executable, data length at entry (u32)
const KEY: usize = 8;
const OWNER: usize = KEY + 32;
const LAMPORTS: usize = OWNER + 32;
const DATA_LEN: usize = LAMPORTS + 8;
const DATA: usize = DATA_LEN + 8;
const REALLOC_PADDING: usize = 10 * 1024;

#[derive(Clone)]
pub struct TestAccount {
    // u64 words keep lamports and the length header aligned
    words: Vec<u64>,
}

impl TestAccount {
    pub fn new(key: Pubkey, owner: Pubkey, lamports: u64, data: &[u8]) -> Self {
        let len = DATA + data.len() + REALLOC_PADDING;
        let mut account = Self {
            words: vec![0u64; len.div_ceil(8)],
        };

        let bytes = account.bytes_mut();
        bytes[0] = u8::MAX;
        bytes[2] = 1;
        bytes[4..KEY].copy_from_slice(&(data.len() as u32).to_le_bytes());
        bytes[KEY..OWNER].copy_from_slice(key.as_ref());
        bytes[OWNER..LAMPORTS].copy_from_slice(owner.as_ref());
        bytes[LAMPORTS..DATA_LEN].copy_from_slice(&lamports.to_le_bytes());
        bytes[DATA_LEN..DATA].copy_from_slice(&(data.len() as u64).to_le_bytes());
        bytes[DATA..DATA + data.len()].copy_from_slice(data);

        account
    }

    /// A wallet or a never-created PDA
    pub fn system(key: Pubkey, lamports: u64) -> Self {
        Self::new(key, anchor_lang::system_program::ID, lamports, &[])
    }

    /// An account this program owns, holding `data`
    pub fn program(key: Pubkey, lamports: u64, data: &[u8]) -> Self {
        Self::new(key, crate::ID, lamports, data)
    }

    /// Serialize an Anchor account into a program-owned test account
    pub fn holding<T: AccountSerialize>(key: Pubkey, lamports: u64, value: &T) -> Self {
        let mut data = Vec::new();
        value.try_serialize(&mut data).unwrap();
        Self::program(key, lamports, &data)
    }

    pub fn info(&mut self) -> AccountInfo<'_> {
        let data_len = self.data_len();
        let base = self.words.as_mut_ptr() as *mut u8;

        // Key, owner, lamports and data are disjoint ranges of the buffer
        // and live as long as the borrow of self.
        unsafe {
            AccountInfo::new(
                &*(base.add(KEY) as *const Pubkey),
                false,
                true,
                &mut *(base.add(LAMPORTS) as *mut u64),
                std::slice::from_raw_parts_mut(base.add(DATA), data_len),
                &*(base.add(OWNER) as *const Pubkey),
                false,
                0,
            )
        }
    }

    pub fn owner(&self) -> Pubkey {
        Pubkey::new_from_array(self.bytes()[OWNER..LAMPORTS].try_into().unwrap())
    }

    pub fn lamports(&self) -> u64 {
        u64::from_le_bytes(self.bytes()[LAMPORTS..DATA_LEN].try_into().unwrap())
    }

    pub fn data_len(&self) -> usize {
        u64::from_le_bytes(self.bytes()[DATA_LEN..DATA].try_into().unwrap()) as usize
    }

    fn bytes(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.words.as_ptr() as *const u8, self.words.len() * 8) }
    }

    fn bytes_mut(&mut self) -> &mut [u8] {
        unsafe {
            std::slice::from_raw_parts_mut(self.words.as_mut_ptr() as *mut u8, self.words.len() * 8)
        }
    }
}
