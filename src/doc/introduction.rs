/*!
# Introductory Tutorial for goofy

goofy is a stack machine you talk to in whitespace-separated words.
There is one stack, it holds integers, and every instruction either
feeds it, eats from it, or looks at it. That's the whole mental model.

Write your first program into a file named `hello.goofy`:

```text
YELL "hello world"
```

and run it:

```text
goofy hello.goofy
```

`YELL` prints the word that follows it. Quotes group words with spaces
into one printable unit and are stripped from the output, so you see
`hello world`, not `"hello world"`.

Now let's use the stack. `SHOVE` pushes a number; the arithmetic
instructions pop their operands and push the result:

```text
SHOVE 2
SHOVE 8
SNIP
```

After `SNIP` the stack holds `4`. Note the order: the value popped
first (the `8`, most recently shoved) is divided by the value popped
second. Subtraction with `YEET` works the same way. If you find
yourself shoving a value just to combine it, use the inline form
instead: `YEET 1` pops one value and subtracts 1 from it.

Programs read input with `SNOOP`, which waits for one line and shoves
it as a number, and make decisions with `BOUNCE`, which compares the
top of the stack against a bound and jumps to a label when the test
passes:

```text
SNOOP
loop:
YELL "again"
YEET 1
BOUNCE > 0 #loop
YELL "done"
FREEZE
```

Type `3` at the prompt and the machine yells `again` three times. The
`loop:` word marks a place; `#loop` names it as a jump target. `FREEZE`
stops the run, though simply running off the end of the program stops
it just as successfully.

That is the entire language: nine instructions and a stack. The next
chapter describes each word precisely, and Appendix A lists every way a
run can fail.

*/
